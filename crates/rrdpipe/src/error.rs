//! Error types for channel operations

use rrdpipe_protocol::ProtocolError;
use thiserror::Error;

/// Result type alias for channel operations
pub type Result<T> = std::result::Result<T, ChannelError>;

/// Errors that can occur when driving the tool subprocess
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The tool binary could not be started
    #[error("Failed to spawn tool: {0}")]
    Spawn(String),

    /// The subprocess has exited or its streams are closed; the channel is
    /// permanently broken and must be recreated
    #[error("Channel closed: subprocess exited or streams closed")]
    ChannelClosed,

    /// The tool replied with an `ERROR:` line; the message is carried
    /// verbatim and the channel remains usable
    #[error("Tool error:{0}")]
    Tool(String),

    /// The configured per-command deadline lapsed before a terminal reply
    #[error("Command timed out before a terminal reply")]
    Timeout,

    /// Validation failure raised before any subprocess I/O
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Other I/O error on the subprocess streams
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChannelError {
    /// Map a stream error to the channel taxonomy
    ///
    /// A torn-down pipe means the subprocess is gone, which is
    /// [`ChannelError::ChannelClosed`] rather than a generic I/O failure.
    pub(crate) fn from_stream(err: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::BrokenPipe | ErrorKind::UnexpectedEof | ErrorKind::WriteZero => {
                Self::ChannelClosed
            }
            _ => Self::Io(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_keeps_message_verbatim() {
        let err = ChannelError::Tool(" invalid rrd file".to_string());
        assert_eq!(err.to_string(), "Tool error: invalid rrd file");
    }

    #[test]
    fn test_broken_pipe_is_channel_closed() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        assert!(matches!(
            ChannelError::from_stream(io),
            ChannelError::ChannelClosed
        ));
    }

    #[test]
    fn test_other_io_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
        assert!(matches!(ChannelError::from_stream(io), ChannelError::Io(_)));
    }

    #[test]
    fn test_protocol_error_converts() {
        let err: ChannelError = ProtocolError::InvalidDatastoreName("x y".into()).into();
        assert!(matches!(err, ChannelError::Protocol(_)));
    }
}
