use super::config::Config;
use super::discover::discover;
use super::error::Error;
use crate::stripper::{self, Stripped};
use std::path::Path;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    Unchanged,
    Stripped { comments: usize },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Summary {
    pub scanned: usize,
    pub rewritten: usize,
    pub comments: usize,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        self.scanned += 1;
        if let Outcome::Stripped { comments } = outcome {
            self.rewritten += 1;
            self.comments += comments;
        }
    }
}

fn strip_file(path: &Path) -> Result<Stripped, Error> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(stripper::strip(&source))
}

/// Strips the comments from the file at `path`, rewriting it in place if (and only if)
/// that changed anything.
pub fn process_file(path: &Path) -> Result<Outcome, Error> {
    let stripped = strip_file(path)?;
    if !stripped.changed {
        log::debug!("'{}' has no comments", path.display());
        return Ok(Outcome::Unchanged);
    }

    println!("Stripping comments from {}", path.display());
    std::fs::write(path, stripped.text).map_err(|source| Error::Write {
        path: path.to_owned(),
        source,
    })?;

    Ok(Outcome::Stripped {
        comments: stripped.comments,
    })
}

/// As `process_file()`, but never writes anything.
pub fn inspect_file(path: &Path) -> Result<Outcome, Error> {
    let stripped = strip_file(path)?;
    if !stripped.changed {
        log::debug!("'{}' has no comments", path.display());
        return Ok(Outcome::Unchanged);
    }

    println!("Would strip comments from {}", path.display());
    Ok(Outcome::Stripped {
        comments: stripped.comments,
    })
}

/// Processes every file selected by `config`, one at a time. The first error aborts the
/// whole run.
pub fn run(config: &Config) -> Result<Summary, Error> {
    let files = discover(config)?;

    let mut summary = Summary::default();
    for path in &files {
        let outcome = if config.dry_run {
            inspect_file(path)?
        } else {
            process_file(path)?
        };
        summary.record(outcome);
    }

    log::info!(
        "{} files scanned, {} {}, {} comments removed",
        summary.scanned,
        summary.rewritten,
        if config.dry_run {
            "would be rewritten"
        } else {
            "rewritten"
        },
        summary.comments
    );

    Ok(summary)
}
