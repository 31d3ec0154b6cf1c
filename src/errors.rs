use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while turning Java source text into declarations.
///
/// Any parse failure is fatal for the whole run: without a complete tree the
/// generator cannot verify that its output covers the library correctly.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Syntax { path: PathBuf, message: String },
}

impl ParseError {
    pub fn syntax(path: &Path, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}
