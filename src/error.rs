//! Error types for reply parsing configuration

use thiserror::Error;

/// Errors that can occur while building pattern tables.
///
/// Parsing itself never fails; only user-supplied configuration can.
#[derive(Error, Debug)]
pub enum ReplyError {
    /// A pattern in one of the tables failed to compile
    #[error("Invalid {table} pattern `{pattern}`: {details}")]
    InvalidPattern {
        table: &'static str,
        pattern: String,
        details: String,
    },

    /// The pattern configuration could not be deserialized
    #[error("Invalid pattern configuration: {0}")]
    Config(String),
}

/// Result type for reply parser configuration
pub type Result<T> = std::result::Result<T, ReplyError>;
