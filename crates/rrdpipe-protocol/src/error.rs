//! Error types for protocol operations
//!
//! Every variant here is a validation failure raised before any subprocess
//! I/O takes place; the channel crate layers its own transport errors on top.

use std::fmt;

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors that can occur while validating or rendering commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Datastore name does not match `^[A-Za-z0-9_]{1,19}$`
    InvalidDatastoreName(String),

    /// Datastore type is not one of GAUGE, COUNTER, DERIVE, ABSOLUTE, COMPUTE
    InvalidDatastoreType(String),

    /// Datastore argument shape does not fit the datastore type
    InvalidDatastoreArguments(String),

    /// Datastore specification is malformed as a whole
    InvalidDatastoreSpec(String),

    /// Archive specification is malformed (CF, xff range, steps, rows)
    InvalidArchiveSpec(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDatastoreName(name) => {
                write!(f, "Invalid datastore name: {}", name)
            }
            Self::InvalidDatastoreType(kind) => {
                write!(f, "Invalid datastore type: {}", kind)
            }
            Self::InvalidDatastoreArguments(msg) => {
                write!(f, "Invalid datastore arguments: {}", msg)
            }
            Self::InvalidDatastoreSpec(msg) => {
                write!(f, "Invalid datastore spec: {}", msg)
            }
            Self::InvalidArchiveSpec(msg) => {
                write!(f, "Invalid archive spec: {}", msg)
            }
        }
    }
}

impl std::error::Error for ProtocolError {}
