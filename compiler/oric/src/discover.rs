//! Source file discovery.
//!
//! Walks input directories for `.ori` and `.mod` files. Vendored code is
//! never picked up: any directory whose name ends in `.vendor` (so any path
//! containing `.vendor/`) is pruned from the walk.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::CliError;

const SOURCE_EXTENSIONS: &[&str] = &["ori", "mod"];
const VENDOR_SUFFIX: &str = ".vendor";

fn is_vendor(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(VENDOR_SUFFIX))
}

fn is_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// All source files below `dir`, sorted by path.
///
/// An empty result is [`CliError::NoFilesFound`].
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_vendor(entry));
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_source(entry.path()) {
            files.push(entry.into_path());
        }
    }

    debug!(dir = %dir.display(), count = files.len(), "discovered sources");
    if files.is_empty() {
        return Err(CliError::NoFilesFound {
            dir: dir.to_path_buf(),
        });
    }
    Ok(files)
}

/// The `--file` and `--directory` arguments of one invocation.
#[derive(Clone, Debug, Default)]
pub struct Inputs {
    pub files: Vec<PathBuf>,
    pub directories: Vec<PathBuf>,
}

impl Inputs {
    /// Explicit files first, then each directory's discoveries in order.
    pub fn resolve(&self) -> Result<Vec<PathBuf>, CliError> {
        if self.files.is_empty() && self.directories.is_empty() {
            return Err(CliError::NoInput);
        }
        let mut paths = self.files.clone();
        for dir in &self.directories {
            paths.extend(discover(dir)?);
        }
        Ok(paths)
    }
}
