//! Error handling for the node client
//!
//! Every failure a client operation can report lives here. A node that
//! answers with an error envelope is *not* a failure: that case is a
//! successfully decoded [`crate::api::ApiResponse::Error`].

use std::fmt;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Error types for client operations
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Caller-supplied argument rejected before any I/O
    InvalidArgument(String),
    /// Connection open/read/close failure
    Transport(String),
    /// Response body is not valid JSON
    Json(String),
    /// Success envelope without the expected `data` object
    MalformedResponse(String),
    /// Required field absent
    MissingField { field: String },
    /// Field present but of the wrong type or shape
    InvalidField { field: String, reason: String },
    /// Bounded string longer than its capacity
    CapacityExceeded { field: String, max: usize },
    /// Type tag this client does not know how to decode
    UnsupportedType { what: String, tag: u64 },
    /// Invalid address format
    InvalidAddress(String),
    /// Cryptographic operation errors
    Crypto(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(String),
}

impl ClientError {
    pub fn missing(field: &str) -> Self {
        ClientError::MissingField {
            field: field.to_string(),
        }
    }

    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ClientError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn unsupported(what: &str, tag: u64) -> Self {
        ClientError::UnsupportedType {
            what: what.to_string(),
            tag,
        }
    }

    /// True for errors raised while decoding a response body.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            ClientError::Json(_)
                | ClientError::MalformedResponse(_)
                | ClientError::MissingField { .. }
                | ClientError::InvalidField { .. }
                | ClientError::CapacityExceeded { .. }
                | ClientError::UnsupportedType { .. }
        )
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            ClientError::Transport(msg) => write!(f, "Transport error: {msg}"),
            ClientError::Json(msg) => write!(f, "Malformed JSON: {msg}"),
            ClientError::MalformedResponse(msg) => write!(f, "Malformed response: {msg}"),
            ClientError::MissingField { field } => write!(f, "Missing field: {field}"),
            ClientError::InvalidField { field, reason } => {
                write!(f, "Invalid field {field}: {reason}")
            }
            ClientError::CapacityExceeded { field, max } => {
                write!(f, "Field {field} exceeds capacity of {max} bytes")
            }
            ClientError::UnsupportedType { what, tag } => {
                write!(f, "Unsupported {what} type: {tag}")
            }
            ClientError::InvalidAddress(msg) => write!(f, "Invalid address: {msg}"),
            ClientError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
            ClientError::Config(msg) => write!(f, "Configuration error: {msg}"),
            ClientError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ClientError::missing("nonce").to_string(),
            "Missing field: nonce"
        );
        assert_eq!(
            ClientError::unsupported("essence", 3).to_string(),
            "Unsupported essence type: 3"
        );
    }

    #[test]
    fn test_decode_error_classification() {
        assert!(ClientError::Json("eof".into()).is_decode_error());
        assert!(ClientError::missing("data").is_decode_error());
        assert!(!ClientError::Transport("refused".into()).is_decode_error());
        assert!(!ClientError::InvalidArgument("len".into()).is_decode_error());
    }
}
