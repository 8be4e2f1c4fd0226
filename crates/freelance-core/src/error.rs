//! Error types for the freelancer analytics service

use std::{error::Error as StdError, fmt};

/// Main error type shared by the provider, client and dashboard crates
#[derive(Debug)]
pub enum Error {
    /// Transport failure: network unreachable, timeout, or non-2xx status
    Transport {
        /// What failed (endpoint or operation)
        operation: String,
        /// Underlying failure message
        message: String,
    },

    /// Response JSON was missing expected keys or had the wrong shape
    Shape {
        /// Endpoint or payload the shape check failed on
        context: String,
        /// What was missing or malformed
        message: String,
    },

    /// Every prediction request encoding was attempted and all failed
    PredictionUnavailable {
        /// One failure description per encoding attempt, in attempt order
        attempts: Vec<String>,
    },

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// I/O error
    Io(std::io::Error),

    /// Serialization error
    Serialization(serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for a transport error
    pub fn transport(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a shape error
    pub fn shape(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shape {
            context: context.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { operation, message } => {
                write!(f, "Transport error during {operation}: {message}")
            }
            Self::Shape { context, message } => {
                write!(f, "Unexpected response shape from {context}: {message}")
            }
            Self::PredictionUnavailable { attempts } => {
                write!(
                    f,
                    "Prediction unavailable after {} encoding attempts: {}",
                    attempts.len(),
                    attempts.join("; ")
                )
            }
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

// From implementations for automatic conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn test_transport_error_display() {
        let error = Error::transport("GET /summary", "connection refused");
        assert_eq!(
            format!("{error}"),
            "Transport error during GET /summary: connection refused"
        );
    }

    #[test]
    fn test_shape_error_display() {
        let error = Error::shape("/data/earnings_distribution", "missing `statistics`");
        assert_eq!(
            format!("{error}"),
            "Unexpected response shape from /data/earnings_distribution: missing `statistics`"
        );
    }

    #[test]
    fn test_prediction_unavailable_lists_attempts() {
        let error = Error::PredictionUnavailable {
            attempts: vec![
                "plain JSON: 422".to_string(),
                "array-wrapped: 422".to_string(),
            ],
        };

        let message = format!("{error}");
        assert!(message.contains("2 encoding attempts"));
        assert!(message.contains("plain JSON: 422"));
        assert!(message.contains("array-wrapped: 422"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let error = Error::from(io_error);

        match error {
            Error::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
        assert!(error.source().is_some());
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{bad json").unwrap_err();
        let error = Error::from(json_error);

        match error {
            Error::Serialization(_) => {}
            _ => panic!("Expected Serialization error variant"),
        }
        assert!(format!("{error}").contains("Serialization error"));
    }

    #[test]
    fn test_configuration_error_display() {
        let error = Error::Configuration {
            message: "invalid dataset size".to_string(),
        };
        assert_eq!(format!("{error}"), "Configuration error: invalid dataset size");
    }

    #[test]
    fn test_non_wrapping_variants_have_no_source() {
        let error = Error::transport("op", "msg");
        assert!(error.source().is_none());

        let error = Error::PredictionUnavailable { attempts: vec![] };
        assert!(error.source().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u32> {
            Ok(7)
        }

        fn returns_error() -> Result<u32> {
            Err(Error::shape("test", "broken"))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
