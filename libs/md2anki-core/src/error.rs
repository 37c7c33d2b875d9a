//! Error types for md2anki-core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while converting a document.
///
/// Document content is never an error: malformed markdown only produces fewer
/// notes or imperfect HTML. Failures come from the filesystem or the writer.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
