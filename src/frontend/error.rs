use std::fmt::Display;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
    Walk(walkdir::Error),
}

impl Error {
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::Read { path, .. } | Error::Write { path, .. } => Some(path.as_path()),
            Error::Walk(err) => err.path(),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::Walk(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Read { path, source } => {
                write!(f, "could not read '{}': {}", path.display(), source)
            }
            Error::Write { path, source } => {
                write!(f, "could not write '{}': {}", path.display(), source)
            }
            Error::Walk(err) => match err.path() {
                Some(path) => write!(f, "could not scan '{}': {}", path.display(), err),
                None => write!(f, "could not scan directory tree: {}", err),
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { source, .. } | Error::Write { source, .. } => Some(source),
            Error::Walk(err) => Some(err),
        }
    }
}
