//! The command channel
//!
//! One [`Channel`] owns one tool subprocess. Requests from any number of
//! callers are serialized through an internal mutex held for the entire
//! write-then-reply round trip, because the tool's output stream has no
//! per-command correlation.

use std::sync::Arc;
use std::time::Duration;

use rrdpipe_protocol::{
    ArchiveSpec, DatastoreSpec, DatastoreValue, Timestamp, create_command, update_command,
};
use tokio::sync::Mutex;
use tokio::time::timeout;

use crate::config::ChannelConfig;
use crate::error::{ChannelError, Result};
use crate::process::ProcessHandle;

/// A serialized command channel to one rrdtool subprocess
///
/// Cloning is cheap and every clone talks to the same subprocess; commands
/// from all clones are processed strictly one at a time.
#[derive(Clone)]
pub struct Channel {
    process: Arc<Mutex<ProcessHandle>>,
    timeout: Option<Duration>,
}

impl Channel {
    /// Open a channel by spawning the tool in remote-control mode
    pub async fn open(config: ChannelConfig) -> Result<Self> {
        let process = ProcessHandle::spawn(&config).await?;
        Ok(Self {
            process: Arc::new(Mutex::new(process)),
            timeout: config.timeout,
        })
    }

    /// Open a channel with the default configuration
    pub async fn open_default() -> Result<Self> {
        Self::open(ChannelConfig::default()).await
    }

    /// Execute a fully formatted command line
    ///
    /// Blocks until the tool produces a terminal reply. The internal lock is
    /// held across the whole round trip, so a concurrent `execute` cannot
    /// write before this command's terminal line has been consumed.
    ///
    /// If a timeout is configured and lapses, the abandoned command's reply
    /// may still arrive on the stream and would be attributed to the next
    /// command, so the channel is broken permanently: the timed-out call
    /// returns [`ChannelError::Timeout`] and every later call fails with
    /// [`ChannelError::ChannelClosed`].
    pub async fn execute(&self, command: &str) -> Result<()> {
        let mut process = self.process.lock().await;
        match self.timeout {
            Some(limit) => match timeout(limit, process.round_trip(command)).await {
                Ok(result) => result,
                Err(_) => {
                    process.poison();
                    Err(ChannelError::Timeout)
                }
            },
            None => process.round_trip(command).await,
        }
    }

    /// Create a round-robin database file
    ///
    /// Validation failures surface before anything is written to the
    /// subprocess.
    pub async fn create(
        &self,
        filename: &str,
        datastores: &[DatastoreSpec],
        archives: &[ArchiveSpec],
    ) -> Result<()> {
        let command = create_command(filename, datastores, archives)?;
        self.execute(&command).await
    }

    /// Record values into a database file at the given timestamp
    pub async fn update(
        &self,
        filename: &str,
        values: &[DatastoreValue],
        timestamp: &Timestamp,
    ) -> Result<()> {
        let command = update_command(filename, values, timestamp)?;
        self.execute(&command).await
    }

    /// Record values using the tool's own clock (the `N` sentinel)
    pub async fn update_now(&self, filename: &str, values: &[DatastoreValue]) -> Result<()> {
        self.update(filename, values, &Timestamp::Now).await
    }

    /// Check if the subprocess is still alive
    pub async fn is_alive(&self) -> bool {
        self.process.lock().await.poll_alive()
    }

    /// End the session and reap the subprocess
    ///
    /// Closes the tool's stdin, which it reads as end-of-session. All
    /// subsequent calls on this channel (or any clone) fail with
    /// [`ChannelError::ChannelClosed`].
    pub async fn close(&self) -> Result<()> {
        self.process.lock().await.close().await
    }

    /// Kill the subprocess without a clean session end
    pub async fn kill(&self) -> Result<()> {
        self.process.lock().await.kill().await
    }
}
