//! Validation for datastore names

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ProtocolError, Result};

/// Regex pattern for valid datastore names
///
/// Valid format: 1 to 19 characters from `[A-Za-z0-9_]`. rrdtool rejects
/// longer or punctuated names, so the pattern is enforced locally before a
/// command line is ever assembled.
static DS_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]{1,19}$").expect("Failed to compile datastore name regex")
});

/// Validate a datastore name
///
/// Valid names:
/// - ASCII letters, digits and underscores only
/// - 1 to 19 characters
/// - Examples: `temp`, `in_octets`, `DS1`
///
/// Invalid names:
/// - Empty: ""
/// - Too long: `a_name_of_twenty_chs`
/// - Punctuation or spaces: "cpu-user", "cpu user", "cpu:user"
///
/// # Errors
///
/// Returns `ProtocolError::InvalidDatastoreName` if the name doesn't match
/// the required pattern.
pub fn validate_datastore_name(name: &str) -> Result<()> {
    if !DS_NAME_PATTERN.is_match(name) {
        return Err(ProtocolError::InvalidDatastoreName(name.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        // Single character
        assert!(validate_datastore_name("a").is_ok());
        assert!(validate_datastore_name("Z").is_ok());
        assert!(validate_datastore_name("7").is_ok());
        assert!(validate_datastore_name("_").is_ok());

        // Typical names
        assert!(validate_datastore_name("temp").is_ok());
        assert!(validate_datastore_name("in_octets").is_ok());
        assert!(validate_datastore_name("DS1").is_ok());
        assert!(validate_datastore_name("load_avg_15").is_ok());

        // Exactly at the length limit
        assert!(validate_datastore_name("a234567890123456789").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        // Empty
        assert!(validate_datastore_name("").is_err());

        // One past the length limit
        assert!(validate_datastore_name("a2345678901234567890").is_err());

        // Punctuation and whitespace
        assert!(validate_datastore_name("cpu-user").is_err());
        assert!(validate_datastore_name("cpu user").is_err());
        assert!(validate_datastore_name("cpu:user").is_err());
        assert!(validate_datastore_name("temp\n").is_err());

        // Non-ASCII
        assert!(validate_datastore_name("tempé").is_err());
    }

    #[test]
    fn test_error_carries_offending_name() {
        let err = validate_datastore_name("bad name").unwrap_err();
        assert_eq!(
            err,
            ProtocolError::InvalidDatastoreName("bad name".to_string())
        );
    }
}
