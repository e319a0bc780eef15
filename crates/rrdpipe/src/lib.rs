//! Async channel driving rrdtool's remote-control mode
//!
//! Spawns `rrdtool -` once per [`Channel`] and drives it over stdin/stdout:
//! typed `create` and `update` requests are validated locally, rendered into
//! the tool's line-oriented command language, written to the subprocess, and
//! resolved against its `OK` / `ERROR:` reply lines. Commands are processed
//! strictly one at a time; concurrent callers queue on the channel's
//! internal lock.
//!
//! # Usage
//!
//! ```ignore
//! use rrdpipe::{Channel, ChannelConfig};
//! use rrdpipe::protocol::{ArchiveSpec, ConsolidationFn, DatastoreSpec, DatastoreValue};
//!
//! let channel = Channel::open(ChannelConfig::default()).await?;
//!
//! channel.create(
//!     "temperature.rrd",
//!     &[DatastoreSpec::gauge("temp", 600, -273, 5000)?],
//!     &[ArchiveSpec::new(ConsolidationFn::Average, 0.5, 1, 1200)?],
//! ).await?;
//!
//! channel.update_now("temperature.rrd", &[DatastoreValue::new("temp", 50)?]).await?;
//! channel.close().await?;
//! ```
//!
//! Out of scope: graphing, fetch/export, pooling of multiple tool instances,
//! and automatic restart of a crashed subprocess. A dead subprocess breaks
//! its channel permanently; open a new one.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod channel;
pub mod config;
pub mod error;
pub mod process;

/// The wire-protocol types (re-exported from `rrdpipe-protocol`)
pub mod protocol {
    pub use rrdpipe_protocol::*;
}

// Re-export commonly used types at crate level
pub use channel::Channel;
pub use config::ChannelConfig;
pub use error::{ChannelError, Result};
pub use rrdpipe_protocol::{
    ArchiveSpec, ConsolidationFn, DatastoreSpec, DatastoreValue, Timestamp, Value,
};
