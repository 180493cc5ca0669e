//! Error types for the catalog and search core

use thiserror::Error;

/// Core catalog errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
