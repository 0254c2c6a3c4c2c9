// Error types shared by the doubles, the email workflow and the config loader.

use std::path::PathBuf;
use thiserror::Error;

/// Raised by a mock when it is used in a way its expectation does not allow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("{operation} called before any expectation was set")]
    NoExpectation { operation: &'static str },

    #[error("unexpected {argument}: expected {expected:?}, got {actual:?}")]
    ArgumentMismatch {
        argument: &'static str,
        expected: String,
        actual: String,
    },

    #[error("{operation} was expected but never called")]
    NotCalled { operation: &'static str },

    #[error("{operation} called after the mock already failed")]
    AlreadyFailed { operation: &'static str },
}

impl ContractViolation {
    pub fn mismatch(
        argument: &'static str,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::ArgumentMismatch {
            argument,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SmtpError {
    #[error("contract violation: {0}")]
    Contract(#[from] ContractViolation),

    #[error("transport error: {0}")]
    Transport(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("delivery failed: {0}")]
    Delivery(#[from] SmtpError),
}

impl EmailError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidRequest(reason.into())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_names_argument_and_values() {
        let err = ContractViolation::mismatch("message", "Hola", "Hola2");
        assert_eq!(
            err.to_string(),
            "unexpected message: expected \"Hola\", got \"Hola2\""
        );
    }

    #[test]
    fn test_smtp_error_wraps_violation() {
        let err: SmtpError = ContractViolation::NoExpectation { operation: "send" }.into();
        assert!(matches!(err, SmtpError::Contract(_)));
        assert_eq!(
            err.to_string(),
            "contract violation: send called before any expectation was set"
        );
    }

    #[test]
    fn test_invalid_request_displays_reason_only() {
        assert_eq!(
            EmailError::invalid("recipient is required").to_string(),
            "recipient is required"
        );
    }
}
