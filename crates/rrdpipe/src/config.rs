//! Channel configuration

use std::time::Duration;

/// Configuration for spawning the tool subprocess
#[derive(Clone, Debug)]
pub struct ChannelConfig {
    /// Path to the rrdtool executable
    pub tool_path: String,

    /// Arguments to pass; the default single `-` enters remote-control mode
    pub args: Vec<String>,

    /// Optional deadline for a full command round trip
    ///
    /// With `None` (the default) a caller blocks for as long as the tool
    /// takes to produce a terminal reply.
    pub timeout: Option<Duration>,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            tool_path: "/usr/bin/rrdtool".to_string(),
            args: vec!["-".to_string()],
            timeout: None,
        }
    }
}

impl ChannelConfig {
    /// Create a configuration pointing at the given executable
    pub fn new(tool_path: impl Into<String>) -> Self {
        Self {
            tool_path: tool_path.into(),
            ..Default::default()
        }
    }

    /// Append an argument
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Replace the argument list
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the per-command timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChannelConfig::default();
        assert_eq!(config.tool_path, "/usr/bin/rrdtool");
        assert_eq!(config.args, vec!["-".to_string()]);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ChannelConfig::new("/opt/rrdtool/bin/rrdtool")
            .with_arg("--daemon")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.tool_path, "/opt/rrdtool/bin/rrdtool");
        assert_eq!(config.args, vec!["-".to_string(), "--daemon".to_string()]);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_with_args_replaces() {
        let config = ChannelConfig::new("/bin/sh").with_args(["-c", "cat"]);
        assert_eq!(config.args, vec!["-c".to_string(), "cat".to_string()]);
    }
}
