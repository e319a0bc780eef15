//! Process management for the tool subprocess
//!
//! Spawns `rrdtool -` once and keeps its stdin/stdout open for the process
//! lifetime. One command round trip is one written line followed by a read
//! loop that consumes lines up to the terminal `OK` / `ERROR:` reply.

use std::process::Stdio;

use rrdpipe_protocol::ReplyLine;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::{debug, warn};

use crate::config::ChannelConfig;
use crate::error::{ChannelError, Result};

/// Handle to a running tool process
pub struct ProcessHandle {
    child: Child,
    stdin: Option<BufWriter<ChildStdin>>,
    stdout: BufReader<ChildStdout>,
}

impl ProcessHandle {
    /// Spawn the tool in remote-control mode
    pub async fn spawn(config: &ChannelConfig) -> Result<Self> {
        let mut cmd = Command::new(&config.tool_path);
        cmd.args(&config.args);

        cmd.stdin(Stdio::piped());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::null());
        cmd.kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .map_err(|e| ChannelError::Spawn(format!("{}: {}", config.tool_path, e)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ChannelError::Spawn("Failed to get stdin".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ChannelError::Spawn("Failed to get stdout".to_string()))?;

        debug!(tool = %config.tool_path, "spawned tool subprocess");

        Ok(Self {
            child,
            stdin: Some(BufWriter::new(stdin)),
            stdout: BufReader::new(stdout),
        })
    }

    /// Write one command line and read up to its terminal reply
    ///
    /// The caller must hold the channel lock for the whole call: the reply
    /// stream has no per-command correlation, so a second writer would make
    /// the replies unparseable.
    pub async fn round_trip(&mut self, command: &str) -> Result<()> {
        if !self.poll_alive() {
            return Err(ChannelError::ChannelClosed);
        }

        let stdin = self.stdin.as_mut().ok_or(ChannelError::ChannelClosed)?;

        debug!(command = command.trim_end(), "issuing command");
        stdin
            .write_all(command.as_bytes())
            .await
            .map_err(ChannelError::from_stream)?;
        if !command.ends_with('\n') {
            stdin
                .write_all(b"\n")
                .await
                .map_err(ChannelError::from_stream)?;
        }
        stdin.flush().await.map_err(ChannelError::from_stream)?;

        self.read_terminal_reply().await
    }

    /// Consume reply lines until the terminal one
    async fn read_terminal_reply(&mut self) -> Result<()> {
        loop {
            let mut line = String::new();
            let n = self
                .stdout
                .read_line(&mut line)
                .await
                .map_err(ChannelError::from_stream)?;
            if n == 0 {
                // EOF: the tool is gone mid-reply
                return Err(ChannelError::ChannelClosed);
            }

            match ReplyLine::classify(line.trim_end_matches(['\r', '\n'])) {
                ReplyLine::Ok => return Ok(()),
                ReplyLine::Error(message) => return Err(ChannelError::Tool(message)),
                ReplyLine::Noise(text) => {
                    warn!(line = %text, "discarding non-terminal output");
                }
            }
        }
    }

    /// Mark the handle permanently broken
    ///
    /// Used after a timed-out round trip: the reply stream may still carry
    /// the abandoned command's terminal line, so it can never be trusted to
    /// correlate again. Drops stdin and signals the process; every later
    /// round trip fails with [`ChannelError::ChannelClosed`].
    pub fn poison(&mut self) {
        self.stdin.take();
        let _ = self.child.start_kill();
    }

    /// Check if the process is still alive
    pub fn poll_alive(&mut self) -> bool {
        self.child.try_wait().ok().flatten().is_none()
    }

    /// End the session by closing stdin, then reap the process
    ///
    /// The tool reads EOF on its stdin as end-of-session and exits on its
    /// own; no signal is needed on this path.
    pub async fn close(&mut self) -> Result<()> {
        if let Some(mut stdin) = self.stdin.take() {
            // Flush anything buffered, then signal EOF
            let _ = stdin.shutdown().await;
        }

        self.child.wait().await.map_err(ChannelError::from_stream)?;
        debug!("tool subprocess closed");
        Ok(())
    }

    /// Kill the process without waiting for it to exit cleanly
    pub async fn kill(&mut self) -> Result<()> {
        self.stdin.take();
        self.child.kill().await.map_err(ChannelError::from_stream)
    }
}
