//! Timestamps for `update` commands

use std::fmt;

/// The timestamp slot of an `update` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    /// The tool's own clock, rendered as the sentinel token `N`
    Now,

    /// An explicit coarse/fine pair, rendered by concatenating the two
    /// decimal components with no separator.
    ///
    /// This is a textual join, not a calendar conversion; the result is only
    /// epoch-like. Callers that need real calendar time should render it
    /// themselves and use [`Timestamp::Literal`].
    Epoch {
        /// Coarse component (most significant digits)
        coarse: u64,
        /// Fine component, appended as-is
        fine: u64,
    },

    /// A pre-formatted timestamp string, passed through unmodified
    Literal(String),
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Now => f.write_str("N"),
            Self::Epoch { coarse, fine } => write!(f, "{}{}", coarse, fine),
            Self::Literal(s) => f.write_str(s),
        }
    }
}
