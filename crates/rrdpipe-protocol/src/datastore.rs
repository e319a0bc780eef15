//! Datastore specifications for `create` commands
//!
//! A datastore is one named time-series slot inside a round-robin database.
//! Its kind governs how rrdtool interprets raw input values (instantaneous
//! gauge, ever-increasing counter, and so on); its arguments are either a
//! heartbeat with min/max bounds or, for COMPUTE, an RPN expression.

use std::fmt;
use std::str::FromStr;

use crate::error::{ProtocolError, Result};
use crate::name::validate_datastore_name;

/// The datastore type, governing value interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatastoreKind {
    /// Instantaneous reading stored as-is
    Gauge,

    /// Ever-increasing counter, stored as a rate with wrap detection
    Counter,

    /// Like COUNTER but without wrap detection (may go negative)
    Derive,

    /// Counter that resets on every read
    Absolute,

    /// Value computed from other datastores via an RPN expression
    Compute,
}

impl DatastoreKind {
    /// The wire token for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gauge => "GAUGE",
            Self::Counter => "COUNTER",
            Self::Derive => "DERIVE",
            Self::Absolute => "ABSOLUTE",
            Self::Compute => "COMPUTE",
        }
    }
}

impl fmt::Display for DatastoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatastoreKind {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GAUGE" => Ok(Self::Gauge),
            "COUNTER" => Ok(Self::Counter),
            "DERIVE" => Ok(Self::Derive),
            "ABSOLUTE" => Ok(Self::Absolute),
            "COMPUTE" => Ok(Self::Compute),
            other => Err(ProtocolError::InvalidDatastoreType(other.to_string())),
        }
    }
}

/// Type-specific arguments of a datastore
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatastoreArgs {
    /// Heartbeat plus integer min/max bounds, rendered `<hb>:<min>:<max>`
    Bounded {
        /// Maximum seconds between two updates before the value is unknown
        heartbeat: i64,
        /// Lower bound on accepted values
        min: i64,
        /// Upper bound on accepted values
        max: i64,
    },

    /// Heartbeat with undefined bounds, rendered `<hb>:U:U`
    Unbounded {
        /// Maximum seconds between two updates before the value is unknown
        heartbeat: i64,
    },

    /// RPN expression for COMPUTE datastores, passed through unvalidated
    Compute(String),
}

impl fmt::Display for DatastoreArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded {
                heartbeat,
                min,
                max,
            } => write!(f, "{}:{}:{}", heartbeat, min, max),
            Self::Unbounded { heartbeat } => write!(f, "{}:U:U", heartbeat),
            Self::Compute(expr) => f.write_str(expr),
        }
    }
}

/// A validated datastore specification, rendered as `DS:<name>:<kind>:<args>`
#[derive(Debug, Clone, PartialEq)]
pub struct DatastoreSpec {
    name: String,
    kind: DatastoreKind,
    args: DatastoreArgs,
}

impl DatastoreSpec {
    /// Create a datastore spec, validating name and kind/argument coherence
    ///
    /// # Errors
    ///
    /// - `InvalidDatastoreName` if the name doesn't match the name pattern
    /// - `InvalidDatastoreArguments` if a COMPUTE kind is given numeric
    ///   arguments, or a numeric kind is given an expression
    pub fn new(name: impl Into<String>, kind: DatastoreKind, args: DatastoreArgs) -> Result<Self> {
        let name = name.into();
        validate_datastore_name(&name)?;

        match (kind, &args) {
            (DatastoreKind::Compute, DatastoreArgs::Compute(_)) => {}
            (DatastoreKind::Compute, _) => {
                return Err(ProtocolError::InvalidDatastoreArguments(format!(
                    "COMPUTE datastore {} requires an expression argument",
                    name
                )));
            }
            (_, DatastoreArgs::Compute(_)) => {
                return Err(ProtocolError::InvalidDatastoreArguments(format!(
                    "{} datastore {} requires heartbeat/min/max arguments",
                    kind, name
                )));
            }
            _ => {}
        }

        Ok(Self { name, kind, args })
    }

    /// Bounded datastore of the given kind: `<hb>:<min>:<max>`
    pub fn bounded(
        name: impl Into<String>,
        kind: DatastoreKind,
        heartbeat: i64,
        min: i64,
        max: i64,
    ) -> Result<Self> {
        Self::new(
            name,
            kind,
            DatastoreArgs::Bounded {
                heartbeat,
                min,
                max,
            },
        )
    }

    /// Datastore with undefined bounds: `<hb>:U:U`
    pub fn unbounded(name: impl Into<String>, kind: DatastoreKind, heartbeat: i64) -> Result<Self> {
        Self::new(name, kind, DatastoreArgs::Unbounded { heartbeat })
    }

    /// Bounded GAUGE datastore
    pub fn gauge(name: impl Into<String>, heartbeat: i64, min: i64, max: i64) -> Result<Self> {
        Self::bounded(name, DatastoreKind::Gauge, heartbeat, min, max)
    }

    /// Bounded COUNTER datastore
    pub fn counter(name: impl Into<String>, heartbeat: i64, min: i64, max: i64) -> Result<Self> {
        Self::bounded(name, DatastoreKind::Counter, heartbeat, min, max)
    }

    /// COMPUTE datastore carrying an RPN expression
    ///
    /// The expression is not validated locally; rrdtool reports malformed
    /// expressions through its `ERROR:` reply.
    pub fn compute(name: impl Into<String>, expression: impl Into<String>) -> Result<Self> {
        Self::new(
            name,
            DatastoreKind::Compute,
            DatastoreArgs::Compute(expression.into()),
        )
    }

    /// The datastore name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The datastore kind
    pub fn kind(&self) -> DatastoreKind {
        self.kind
    }

    /// The type-specific arguments
    pub fn args(&self) -> &DatastoreArgs {
        &self.args
    }
}

impl fmt::Display for DatastoreSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DS:{}:{}:{}", self.name, self.kind, self.args)
    }
}
