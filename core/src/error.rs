//! Error types for the Flex API client.
//!
//! # Design
//! Transport failures keep the upstream status code and body because that is
//! usually the only diagnostic the Flex API gives back. `LookupMiss` gets a
//! dedicated variant so a broken appendix (a record referencing a code the
//! response never defined) fails loudly instead of producing a half-resolved
//! record.

use std::fmt;

/// Errors returned by the resource clients and the response resolver.
#[derive(Debug)]
pub enum FlexError {
    /// The transport collaborator failed: network error or non-2xx response.
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// The response body was not valid JSON or did not have the expected shape.
    Decode(String),

    /// A timestamp string or time-zone name could not be interpreted during
    /// UTC conversion.
    Parse(String),

    /// A record referenced a carrier or airport code with no appendix entry.
    LookupMiss { table: &'static str, code: String },
}

impl fmt::Display for FlexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlexError::Transport {
                status: Some(status),
                message,
            } => write!(f, "HTTP {status}: {message}"),
            FlexError::Transport {
                status: None,
                message,
            } => write!(f, "transport failed: {message}"),
            FlexError::Decode(msg) => write!(f, "decode failed: {msg}"),
            FlexError::Parse(msg) => write!(f, "parse failed: {msg}"),
            FlexError::LookupMiss { table, code } => {
                write!(f, "no {table} appendix entry for code {code:?}")
            }
        }
    }
}

impl std::error::Error for FlexError {}
