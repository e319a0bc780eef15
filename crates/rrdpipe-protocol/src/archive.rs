//! Archive (RRA) specifications for `create` commands

use std::fmt;
use std::str::FromStr;

use crate::error::{ProtocolError, Result};

/// Consolidation function used when compressing samples into archive rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsolidationFn {
    /// Keep the largest sample in the window
    Max,

    /// Keep the smallest sample in the window
    Min,

    /// Average all samples in the window
    Average,

    /// Keep the most recent sample in the window
    Last,
}

impl ConsolidationFn {
    /// The wire token for this consolidation function
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Average => "AVERAGE",
            Self::Last => "LAST",
        }
    }
}

impl fmt::Display for ConsolidationFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsolidationFn {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MAX" => Ok(Self::Max),
            "MIN" => Ok(Self::Min),
            "AVERAGE" => Ok(Self::Average),
            "LAST" => Ok(Self::Last),
            other => Err(ProtocolError::InvalidArchiveSpec(format!(
                "unrecognized consolidation function: {}",
                other
            ))),
        }
    }
}

/// A validated archive specification, rendered as `RRA:<CF>:<xff>:<steps>:<rows>`
///
/// The x-files factor is rendered to two decimal places on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveSpec {
    cf: ConsolidationFn,
    xff: f64,
    steps: u32,
    rows: u32,
}

impl ArchiveSpec {
    /// Create an archive spec
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidArchiveSpec` if xff is not a finite
    /// value in `0..=1`, or if steps or rows is zero.
    pub fn new(cf: ConsolidationFn, xff: f64, steps: u32, rows: u32) -> Result<Self> {
        if !xff.is_finite() || !(0.0..=1.0).contains(&xff) {
            return Err(ProtocolError::InvalidArchiveSpec(format!(
                "xff must be in 0..=1, got {}",
                xff
            )));
        }
        if steps == 0 {
            return Err(ProtocolError::InvalidArchiveSpec(
                "steps must be positive".to_string(),
            ));
        }
        if rows == 0 {
            return Err(ProtocolError::InvalidArchiveSpec(
                "rows must be positive".to_string(),
            ));
        }

        Ok(Self {
            cf,
            xff,
            steps,
            rows,
        })
    }

    /// The consolidation function
    pub fn cf(&self) -> ConsolidationFn {
        self.cf
    }

    /// The x-files factor
    pub fn xff(&self) -> f64 {
        self.xff
    }

    /// Steps consolidated into one archive row
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Number of rows the archive retains
    pub fn rows(&self) -> u32 {
        self.rows
    }
}

impl fmt::Display for ArchiveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RRA:{}:{:.2}:{}:{}",
            self.cf, self.xff, self.steps, self.rows
        )
    }
}
