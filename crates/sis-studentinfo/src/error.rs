//! Student info error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid session URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: MalformedUrl,
    },

    #[error("Student index {index} out of range (roster size {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Why a session URL was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedUrl {
    #[error("malformed URL: {0}")]
    Syntax(#[from] url::ParseError),

    #[error("unknown protocol: {0}")]
    UnknownProtocol(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudentError {
    #[error("Student name '{name}' contains {parts} parts, maximum is {max}")]
    NameFormat {
        name: String,
        parts: usize,
        max: usize,
    },
}
