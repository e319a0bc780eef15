//! Update values and name/value pairs for `update` commands

use std::fmt;

use crate::error::Result;
use crate::name::validate_datastore_name;

/// A value accepted by `update`, with an explicit text-rendering rule
///
/// A closed sum over the three representations rrdtool distinguishes on the
/// wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer, rendered as decimal text
    Integer(i64),

    /// Float, rendered as decimal text (no exponent for ordinary magnitudes)
    Float(f64),

    /// Pre-formatted text, passed through unmodified (e.g. `U` for unknown)
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// A datastore name paired with the value to record for it
#[derive(Debug, Clone, PartialEq)]
pub struct DatastoreValue {
    name: String,
    value: Value,
}

impl DatastoreValue {
    /// Create a name/value pair, validating the name
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidDatastoreName` if the name doesn't
    /// match the name pattern.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        let name = name.into();
        validate_datastore_name(&name)?;

        Ok(Self {
            name,
            value: value.into(),
        })
    }

    /// The datastore name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value to record
    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;

    #[test]
    fn test_integer_rendering() {
        assert_eq!(Value::from(50).to_string(), "50");
        assert_eq!(Value::from(-273i64).to_string(), "-273");
    }

    #[test]
    fn test_float_rendering() {
        assert_eq!(Value::from(0.5).to_string(), "0.5");
        assert_eq!(Value::from(21.75).to_string(), "21.75");
    }

    #[test]
    fn test_text_passthrough() {
        assert_eq!(Value::from("U").to_string(), "U");
        assert_eq!(Value::from("1:23").to_string(), "1:23");
    }

    #[test]
    fn test_pair_name_validated() {
        assert!(DatastoreValue::new("temp", 50).is_ok());

        let err = DatastoreValue::new("temp!", 50).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidDatastoreName(_)));
    }
}
