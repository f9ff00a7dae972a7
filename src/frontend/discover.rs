use super::config::Config;
use super::error::Error;
use itertools::Itertools;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| name.starts_with('.'))
}

fn relative_to<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

/// Finds every regular file under `config.root` eligible for stripping, sorted by path.
/// Hidden files and directories are never visited.
pub fn discover(config: &Config) -> Result<Vec<PathBuf>, Error> {
    log::debug!(
        "scanning '{}' for [{}] excluding [{}]",
        config.root.display(),
        config.patterns.iter().join(", "),
        config.excluded.iter().join(", ")
    );

    let mut found = Vec::new();
    for entry in WalkDir::new(&config.root)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
    {
        let entry = entry?;
        if !entry.file_type().is_file() || !config.is_selected(entry.path()) {
            continue;
        }

        let relative = relative_to(&config.root, entry.path());
        if let Some(substr) = config.excluded_by(relative) {
            log::debug!("skipping '{}' (contains '{}')", relative.display(), substr);
            continue;
        }

        log::debug!("found '{}'", entry.path().display());
        found.push(entry.into_path());
    }

    Ok(found.into_iter().sorted().collect())
}
