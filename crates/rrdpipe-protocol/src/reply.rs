//! Classification of the tool's reply lines
//!
//! The output stream carries no per-command framing beyond line boundaries:
//! a command's reply is every line up to and including the first terminal
//! line. A line starting `OK` is terminal success (rrdtool appends usage
//! statistics after it, which are discarded); a line starting `ERROR:` is
//! terminal failure carrying the rest of the line verbatim. Everything else
//! is non-terminal noise.

/// One inbound line, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyLine {
    /// Terminal success
    Ok,

    /// Terminal failure; the message is the text after `ERROR:`, verbatim
    /// (leading whitespace included)
    Error(String),

    /// Non-terminal output preceding the terminal line
    Noise(String),
}

impl ReplyLine {
    /// Classify a single line (trailing newline already stripped)
    pub fn classify(line: &str) -> Self {
        if line.starts_with("OK") {
            Self::Ok
        } else if let Some(message) = line.strip_prefix("ERROR:") {
            Self::Error(message.to_string())
        } else {
            Self::Noise(line.to_string())
        }
    }

    /// Whether this line ends the current command's reply
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Noise(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_with_statistics_discarded() {
        let line = ReplyLine::classify("OK u:0.01 s:0.00 r:0.01");
        assert_eq!(line, ReplyLine::Ok);
        assert!(line.is_terminal());
    }

    #[test]
    fn test_bare_ok() {
        assert_eq!(ReplyLine::classify("OK"), ReplyLine::Ok);
    }

    #[test]
    fn test_error_message_verbatim() {
        let line = ReplyLine::classify("ERROR: invalid rrd file");
        assert_eq!(line, ReplyLine::Error(" invalid rrd file".to_string()));
        assert!(line.is_terminal());
    }

    #[test]
    fn test_error_without_space() {
        let line = ReplyLine::classify("ERROR:boom");
        assert_eq!(line, ReplyLine::Error("boom".to_string()));
    }

    #[test]
    fn test_other_lines_are_noise() {
        let line = ReplyLine::classify("some informational output");
        assert_eq!(
            line,
            ReplyLine::Noise("some informational output".to_string())
        );
        assert!(!line.is_terminal());

        // Not mistaken for a terminal even though it mentions one
        assert!(!ReplyLine::classify(" OK").is_terminal());
        assert!(!ReplyLine::classify("warning: ERROR: nested").is_terminal());
    }
}
