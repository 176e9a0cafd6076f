use std::{fmt, io};

use axum::{http::StatusCode, response::{IntoResponse, Response}};

/// Custom error types for the marquee application
///
/// Degrading utilities carry these out of their fallible cores and swallow
/// them in their wrappers; propagating services hand them straight to the
/// caller. `Message` is the normalized form produced by the error handler,
/// so its display is the bare message with no prefix.
#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    NotFound,
    InvalidPath,
    Template(String),
    InvalidDate(String),
    InvalidPrice(String),
    Query(String),
    Object(String),
    EmptyObject,
    ObjectTooLarge { size: usize, cap: usize },
    Message(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {}", e),
            AppError::NotFound => write!(f, "not found"),
            AppError::InvalidPath => write!(f, "invalid path"),
            AppError::Template(e) => write!(f, "template error: {}", e),
            AppError::InvalidDate(value) => write!(f, "invalid date value: {}", value),
            AppError::InvalidPrice(value) => write!(f, "invalid price value: {}", value),
            AppError::Query(e) => write!(f, "query error: {}", e),
            AppError::Object(e) => write!(f, "object store error: {}", e),
            AppError::EmptyObject => write!(f, "cannot register an empty object"),
            AppError::ObjectTooLarge { size, cap } => {
                write!(f, "object of {} bytes exceeds the {} byte cap", size, cap)
            }
            AppError::Message(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            AppError::InvalidPath => (StatusCode::BAD_REQUEST, "Invalid path").into_response(),
            AppError::Io(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("I/O error: {}", e),
            )
                .into_response(),
            AppError::Template(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response(),
            AppError::InvalidDate(value) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid date value: {}", value),
            )
                .into_response(),
            AppError::InvalidPrice(value) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid price value: {}", value),
            )
                .into_response(),
            AppError::Query(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Query error: {}", e),
            )
                .into_response(),
            AppError::Object(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Object store error: {}", e),
            )
                .into_response(),
            AppError::EmptyObject => (
                StatusCode::BAD_REQUEST,
                "Cannot register an empty object",
            )
                .into_response(),
            AppError::ObjectTooLarge { size, cap } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                format!("Object of {} bytes exceeds the {} byte cap", size, cap),
            )
                .into_response(),
            AppError::Message(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
