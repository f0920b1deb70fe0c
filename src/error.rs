// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// The only hard failure of an extraction: nothing usable came out of the markup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no HTML was provided")]
    EmptyInput,

    #[error("no displayed <table> element was found in the HTML")]
    NoTable,

    #[error("every table in the HTML is empty")]
    EmptyTable,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
