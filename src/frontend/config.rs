use std::ffi::OsStr;
use std::fmt::Display;
use std::path::{Path, PathBuf};

pub const DEFAULT_PATTERNS: [Pattern; 5] = [
    Pattern::Extension("c"),
    Pattern::Extension("h"),
    Pattern::Extension("S"),
    Pattern::Name("Makefile"),
    Pattern::Extension("ld"),
];

pub const DEFAULT_EXCLUDED: [&str; 2] = ["tools", "limine"];

/// Which file names are eligible for stripping. Matching is case sensitive, so
/// `Extension("S")` selects preprocessed assembly but not `.s` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Extension(&'static str),
    Name(&'static str),
}

impl Pattern {
    pub fn matches(&self, path: &Path) -> bool {
        match *self {
            Pattern::Extension(ext) => path.extension() == Some(OsStr::new(ext)),
            Pattern::Name(name) => path.file_name() == Some(OsStr::new(name)),
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Extension(ext) => write!(f, "*.{}", ext),
            Pattern::Name(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub patterns: Vec<Pattern>,

    /// Any file whose path relative to `root` contains one of these substrings is skipped.
    /// This is a substring test, not a path component test: `mytools/a.c` is excluded too.
    pub excluded: Vec<String>,

    pub dry_run: bool,
}

impl Config {
    pub fn with_root(root: PathBuf) -> Self {
        Config {
            root,
            ..Config::default()
        }
    }

    pub fn is_selected(&self, path: &Path) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(path))
    }

    pub fn excluded_by(&self, relative: &Path) -> Option<&str> {
        let relative = relative.to_string_lossy();
        self.excluded
            .iter()
            .find(|substr| relative.contains(substr.as_str()))
            .map(String::as_str)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: PathBuf::from("."),
            patterns: DEFAULT_PATTERNS.to_vec(),
            excluded: DEFAULT_EXCLUDED.iter().map(|s| (*s).to_owned()).collect(),
            dry_run: false,
        }
    }
}
