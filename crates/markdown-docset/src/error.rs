use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsetError {
    #[error("input file name '{0}' does not produce a docset name")]
    InvalidName(String),

    #[error("docset bundle already exists: {}", .0.display())]
    BundleExists(PathBuf),

    #[error("no syntax definition for code fence language '{0}'")]
    UnknownLanguage(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("search index error: {0}")]
    Index(#[from] rusqlite::Error),

    #[error("syntax highlighting failed: {0}")]
    Highlight(#[from] syntect::Error),
}

pub type Result<T> = std::result::Result<T, DocsetError>;
