use serde::Serialize;
use thiserror::Error;

/// A single failed field check, as reported to the caller of the intake
/// boundary. `field` names the offending input field, `message` is the
/// human readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldIssue { field: field.into(), message: message.into() }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse snapshot JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    /// One or more input fields failed the intake checks. All failing
    /// fields are collected before this is returned, not just the first one.
    #[error("Validation failed ({} issue(s))", .0.len())]
    Validation(Vec<FieldIssue>),

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    #[error("Failed to build internal domain model: {0}")]
    ModelConstructionError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
