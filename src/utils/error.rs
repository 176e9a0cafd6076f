//! Error normalization
//!
//! Collapses raised values of unknown shape into a single string message and
//! re-raises them as [`AppError::Message`]. The handler never returns a
//! success value; it exists purely to unify heterogeneous failure shapes
//! into one raisable form.

use log::error;
use serde_json::Value;

use crate::errors::AppError;

/// Sentinel message used when the value cannot even be serialized
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// A raised value of unknown shape
#[derive(Debug)]
pub enum ErrorValue {
    /// A structured error; its own message wins
    Failure(Box<dyn std::error::Error + Send + Sync>),
    /// Already a plain message
    Message(String),
    /// Anything else, carried as a JSON payload
    Payload(Value),
}

impl ErrorValue {
    /// Wrap a structured error
    pub fn failure(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ErrorValue::Failure(Box::new(err))
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for ErrorValue {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        ErrorValue::Failure(err)
    }
}

impl From<&str> for ErrorValue {
    fn from(message: &str) -> Self {
        ErrorValue::Message(message.to_string())
    }
}

impl From<String> for ErrorValue {
    fn from(message: String) -> Self {
        ErrorValue::Message(message)
    }
}

impl From<Value> for ErrorValue {
    fn from(payload: Value) -> Self {
        ErrorValue::Payload(payload)
    }
}

/// Produce the single-string form of a raised value
///
/// Structured errors yield their display message, strings pass through, and
/// any other payload is serialized as JSON, falling back to
/// [`UNKNOWN_ERROR`] if serialization itself fails.
pub fn normalize_message(value: &ErrorValue) -> String {
    match value {
        ErrorValue::Failure(err) => err.to_string(),
        ErrorValue::Message(message) => message.clone(),
        ErrorValue::Payload(payload) => match serde_json::to_string(payload) {
            Ok(serialized) => serialized,
            Err(_) => UNKNOWN_ERROR.to_string(),
        },
    }
}

/// Log a raised value once and re-raise it in normalized form
///
/// This never returns a success value: the `Ok` arm is uninhabited for the
/// caller's purposes, so `return handle_error(value);` ends the surrounding
/// function with the normalized error.
pub fn handle_error<T>(value: ErrorValue) -> Result<T, AppError> {
    let message = normalize_message(&value);
    error!("Unhandled error: {}", message);
    Err(AppError::Message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn structured_errors_keep_their_message() {
        let raised: Result<(), AppError> =
            handle_error(ErrorValue::failure(io::Error::new(io::ErrorKind::Other, "x")));
        match raised {
            Err(err) => assert_eq!(err.to_string(), "x"),
            Ok(()) => panic!("handle_error returned normally"),
        }
    }

    #[test]
    fn strings_pass_through_unchanged() {
        let raised: Result<(), AppError> = handle_error(ErrorValue::from("y"));
        match raised {
            Err(err) => assert_eq!(err.to_string(), "y"),
            Ok(()) => panic!("handle_error returned normally"),
        }
    }

    #[test]
    fn payloads_are_serialized_as_json() {
        let payload = serde_json::json!({ "code": 7, "hint": "retry" });
        let raised: Result<(), AppError> = handle_error(ErrorValue::from(payload));
        match raised {
            Err(err) => assert_eq!(err.to_string(), "{\"code\":7,\"hint\":\"retry\"}"),
            Ok(()) => panic!("handle_error returned normally"),
        }
    }

    #[test]
    fn empty_payloads_still_serialize() {
        let raised: Result<(), AppError> = handle_error(ErrorValue::from(serde_json::json!({})));
        match raised {
            Err(err) => assert_eq!(err.to_string(), "{}"),
            Ok(()) => panic!("handle_error returned normally"),
        }
    }

    #[test]
    fn app_errors_can_be_renormalized() {
        let raised: Result<(), AppError> =
            handle_error(ErrorValue::failure(AppError::NotFound));
        match raised {
            Err(err) => assert_eq!(err.to_string(), "not found"),
            Ok(()) => panic!("handle_error returned normally"),
        }
    }
}
