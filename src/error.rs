//! Error types for vif-spec
//!
//! The tables themselves never fail. These errors describe the lookups a
//! generator must not paper over: unknown element names and PDO type codes
//! outside the defined range.

use thiserror::Error;

/// Result type alias using vif-spec Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for vif-spec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Element name is not a recognized VIF element
    #[error("unknown VIF element: '{0}'")]
    UnknownElement(String),

    /// PDO type code outside 0..=3
    #[error("invalid PDO type code: {0}")]
    InvalidPdoType(u32),

    /// Rejected table override
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an unknown element error
    pub fn unknown_element(name: impl Into<String>) -> Self {
        Error::UnknownElement(name.into())
    }

    /// Returns true if the error means the input document is malformed
    /// and generation must stop.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::InvalidPdoType(_) | Error::UnknownElement(_))
    }
}
