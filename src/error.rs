extern crate thiserror;

use std::{io, path::PathBuf};

use sswcleaner::ConfigError;
use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("{0}")]
    Table(#[from] TableError),
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error: {}: {1}", .0.display())]
    File(PathBuf, io::ErrorKind),

    #[error("Stdin Error: {0}")]
    Stdin(io::ErrorKind),

    #[error("Stdout Error: {0}")]
    Stdout(io::ErrorKind),
}

/// Resource table file errors.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("{file}: empty table file")]
    Empty { file: String },

    #[error("{file}: missing column `{column}`")]
    MissingColumn { file: String, column: String },

    #[error("{file}: row {row} has {found} fields, expected {expected}")]
    RowWidth {
        file: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{file}: unterminated quoted field")]
    UnterminatedQuote { file: String },

    #[error("{file}: {message}")]
    Json { file: String, message: String },
}
