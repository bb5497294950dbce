//! Error types for the extraction core.
//!
//! These are returned from the fallible core operations (resource parsing,
//! sorted insertion, orchestration). Scanner misses are not errors: a cursor
//! that is not inside a string literal is a normal control-flow result.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("malformed resource file: {0}")]
    MalformedResourceFile(String),

    #[error("resource key `{0}` already exists")]
    KeyAlreadyExists(String),

    #[error("resource file has no closing </resources> tag")]
    MissingClosingTag,

    #[error("resource key is empty after normalization")]
    EmptyKey,

    #[error("invalid edit: {0}")]
    InvalidEdit(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for ExtractError {
    fn from(err: quick_xml::Error) -> Self {
        ExtractError::MalformedResourceFile(err.to_string())
    }
}
