//! Error types for linklab
//!
//! Two error families cross the service boundary: execution failures
//! (`Definition`, `Execution`) propagate to the caller of `execute`,
//! while retrieval failures (`NoExperiments`, `NotFound`, `Storage`)
//! are recovered into error-shaped result documents by the service.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// linklab error types
#[derive(Error, Debug)]
pub enum Error {
    /// Experiment description was malformed or failed validation
    #[error("invalid experiment definition: {0}")]
    Definition(String),

    /// Pipeline run failed internally; no result was stored
    #[error("experiment execution failed: {0}")]
    Execution(String),

    /// The store has no completed experiments yet
    #[error("no experiments have been recorded yet")]
    NoExperiments,

    /// No experiment with this id has ever completed
    #[error("experiment with ID '{0}' doesn't exist")]
    NotFound(u64),

    /// A stored result exists but could not be decoded
    #[error("stored result for experiment {id} is unreadable: {reason}")]
    Storage {
        /// Id of the experiment whose payload failed to decode
        id: u64,
        /// Underlying decode failure
        reason: String,
    },

    /// A mandatory request parameter was absent
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::NotFound(9999);
        assert_eq!(err.to_string(), "experiment with ID '9999' doesn't exist");

        let err = Error::Storage {
            id: 3,
            reason: "truncated payload".to_string(),
        };
        assert!(err.to_string().contains("experiment 3"));
        assert!(err.to_string().contains("truncated payload"));
    }

    #[test]
    fn test_missing_parameter_message() {
        let err = Error::MissingParameter("icpType");
        assert_eq!(err.to_string(), "missing required parameter 'icpType'");
    }
}
