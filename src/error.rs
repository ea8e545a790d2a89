//! Crate-level error type for the command layer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::digest::HashError;

#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading an input file
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input file is not the expected JSON shape
    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Pins file parsed but names no components
    #[error("pins file '{path}' defines no pins")]
    EmptyPins { path: PathBuf },

    #[error(transparent)]
    Hash(#[from] HashError),
}

pub type Result<T> = std::result::Result<T, Error>;
