//! Shared wire types for the rrdtool remote-control protocol
//!
//! This crate models the text mini-language that `rrdtool -` (remote-control
//! mode) accepts on stdin and the reply lines it writes to stdout. It is the
//! pure half of the rrdpipe workspace: validation, rendering, and reply
//! classification, with no I/O of its own.
//!
//! # Type Organization
//!
//! - **Datastore types**: [`datastore`] - kinds, argument shapes, DS specs
//! - **Archive types**: [`archive`] - consolidation functions, RRA specs
//! - **Value types**: [`value`] - update values and name/value pairs
//! - **Timestamps**: [`timestamp`] - the `N` sentinel and explicit forms
//! - **Command assembly**: [`command`] - `create` / `update` line rendering
//! - **Reply parsing**: [`reply`] - `OK` / `ERROR:` / noise classification
//! - **Error types**: [`error`] - validation failures, raised before any I/O
//!
//! # Design Principles
//!
//! - **Zero I/O**: all types are pure data structures
//! - **Fail fast**: every validation error is produced before a single byte
//!   could reach the subprocess
//! - **Exact rendering**: `Display` impls produce the wire tokens verbatim

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod command;
pub mod datastore;
pub mod error;
pub mod name;
pub mod reply;
pub mod timestamp;
pub mod value;

// Re-export commonly used types at crate level
pub use archive::{ArchiveSpec, ConsolidationFn};
pub use command::{create_command, update_command};
pub use datastore::{DatastoreArgs, DatastoreKind, DatastoreSpec};
pub use error::{ProtocolError, Result};
pub use name::validate_datastore_name;
pub use reply::ReplyLine;
pub use timestamp::Timestamp;
pub use value::{DatastoreValue, Value};
