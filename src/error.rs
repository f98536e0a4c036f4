//! Errors raised while loading keys and reporting on trees. The tree itself
//! never fails.

use std::path::PathBuf;

use thiserror::Error;

/// Why a key file couldn't be turned into keys.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Error opening file: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No file given for the {0} tree")]
    MissingPath(&'static str),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Why a demonstration suite stopped early.
#[derive(Error, Debug)]
pub enum SuiteError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

pub type SuiteResult<T> = Result<T, SuiteError>;
