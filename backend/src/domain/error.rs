//! Domain-level error type.
//!
//! Transport agnostic: inbound adapters map the [`ErrorCode`] to an HTTP
//! status, and the payload serialises as the `{"error": <message>}` envelope
//! every failing endpoint returns.

use serde::Serialize;

/// Stable failure category describing where an operation went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The request is malformed or fails validation before any side effect.
    InvalidRequest,
    /// The location or record does not exist.
    NotFound,
    /// An upstream collaborator is unreachable or rejected the call.
    ServiceUnavailable,
    /// Anything unanticipated.
    InternalError,
}

/// Domain error payload.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Location not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ErrorBody")]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create a new error with an explicit code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

/// Wire shape of a failure: `{"error": <message>}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<Error> for ErrorBody {
    fn from(value: Error) -> Self {
        Self {
            error: value.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_as_error_envelope() {
        let err = Error::invalid_request("location is required");
        let json = serde_json::to_value(&err).expect("error serialises");
        assert_eq!(json, serde_json::json!({ "error": "location is required" }));
    }

    #[test]
    fn convenience_constructors_set_codes() {
        assert_eq!(Error::invalid_request("x").code(), ErrorCode::InvalidRequest);
        assert_eq!(Error::not_found("x").code(), ErrorCode::NotFound);
        assert_eq!(
            Error::service_unavailable("x").code(),
            ErrorCode::ServiceUnavailable
        );
        assert_eq!(Error::internal("x").code(), ErrorCode::InternalError);
    }

    #[test]
    fn display_is_the_message() {
        assert_eq!(Error::not_found("Not found").to_string(), "Not found");
    }
}
