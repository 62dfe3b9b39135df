//! Errors the driver reports before any source reaches the lexer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no file or directory specified")]
    NoInput,

    #[error("no files found in {}", dir.display())]
    NoFilesFound { dir: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}
