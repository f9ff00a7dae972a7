use decomment::cli::command;
use structopt::StructOpt;

fn main() {
    let cmd = command::CommandRoot::from_args();
    command::terminal_init(&cmd);
    command::root(cmd);
}
