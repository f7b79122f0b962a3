//! Error types for pager configuration and planning.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the pagewin crates.
pub type Result<T, E = PagerError> = std::result::Result<T, E>;

/// Errors that can occur while configuring a pager or planning a window.
#[derive(Debug, Error)]
pub enum PagerError {
    /// A configuration value was rejected.
    #[error("Invalid configuration for `{field}`: {message}")]
    InvalidConfiguration { field: &'static str, message: String },

    /// The planner was called with a current page outside `[0, page_count)`.
    #[error("Page {current} is out of range for {page_count} page(s)")]
    PreconditionViolated { current: usize, page_count: usize },

    /// A configuration file could not be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PagerError {
    /// Create an invalid configuration error for a field.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            message: message.into(),
        }
    }

    /// Whether this error was caused by a rejected configuration value.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}

/// Convert a signed count from an untyped source into a `usize`.
///
/// Hosts that accept signed input (command lines, loosely typed configs)
/// go through this so that negative counts surface as
/// [`PagerError::InvalidConfiguration`].
pub fn non_negative(field: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| PagerError::invalid(field, format!("{value} is negative")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("total_items", 0).unwrap(), 0);
        assert_eq!(non_negative("total_items", 42).unwrap(), 42);

        let err = non_negative("total_items", -1).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(err.to_string().contains("total_items"));
    }

    #[test]
    fn test_precondition_message() {
        let err = PagerError::PreconditionViolated {
            current: 7,
            page_count: 3,
        };
        assert_eq!(err.to_string(), "Page 7 is out of range for 3 page(s)");
        assert!(!err.is_invalid_configuration());
    }
}
