use crate::frontend::{self, Config};
use ansi_term::Color::Red;
use anyhow::Context;
use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "decomment",
    about = "Strips C-style comments from the sources under a directory, in place."
)]
pub struct CommandRoot {
    /// Directory to process (recursively). Defaults to the current directory.
    #[structopt(name = "root", parse(from_os_str))]
    root: Option<PathBuf>,

    /// Report the files which would be rewritten, but leave them alone.
    #[structopt(long)]
    dry_run: bool,

    /// Log more (repeat for even more). `RUST_LOG` overrides this.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

impl CommandRoot {
    pub fn config(&self) -> Config {
        let mut config = match &self.root {
            Some(root) => Config::with_root(root.clone()),
            None => Config::default(),
        };
        config.dry_run = self.dry_run;
        config
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(windows)]
fn enable_ansi() {
    // Without ANSI support we just get some escape codes in error messages.
    let _ = ansi_term::enable_ansi_support();
}

#[cfg(not(windows))]
fn enable_ansi() {}

pub fn terminal_init(cmd: &CommandRoot) {
    enable_ansi();

    let mut builder = env_logger::Builder::new();
    builder.filter_level(cmd.log_level());
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

pub fn execute(cmd: &CommandRoot) -> Result<frontend::Summary, anyhow::Error> {
    let config = cmd.config();
    frontend::run(&config)
        .with_context(|| format!("stripping comments under '{}'", config.root.display()))
}

pub fn root(cmd: CommandRoot) -> ! {
    match execute(&cmd) {
        Ok(_) => std::process::exit(0),
        Err(err) => {
            eprintln!("{} {:#}", Red.bold().paint("error:"), err);
            std::process::exit(1);
        }
    }
}
