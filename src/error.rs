use thiserror::Error;

/// SNI router error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SniError {
    /// The hostname or pattern string is malformed (empty string, empty label,
    /// or a `*` anywhere other than as the leading `*.` prefix).
    #[error("Invalid hostname pattern: {0}")]
    InvalidPattern(String),

    /// The targeted slot (exact or wildcard) already holds a registration.
    #[error("Hostname already registered: {0}")]
    AlreadyRegistered(String),
}

pub type Result<T> = std::result::Result<T, SniError>;
