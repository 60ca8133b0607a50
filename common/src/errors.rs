//! Error taxonomy shared by both submission flows.
//!
//! Messages rendered through `Display` are the exact strings shown to the
//! visitor, so the UI can print an error without translating it.

use thiserror::Error;

/// A field-level problem that blocks submission. Only the first failing rule
/// is ever reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please verify that you are not a robot")]
    ConsentRequired,
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidMobile,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please upload your resume")]
    MissingResume,
}

/// Failures of a submission attempt after validation passed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("The request timed out")]
    Timeout,
    #[error("The server responded with status {status}")]
    Server { status: u16, message: Option<String> },
    #[error("Failed to connect to server: {0}")]
    Network(String),
    #[error("Unable to download brochure. Please ensure the server is running or try again later.")]
    AssetUnavailable(String),
    #[error("Unable to open WhatsApp. Please try again.")]
    DeepLink(String),
}

/// Failures of the local application log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("application storage is unavailable: {0}")]
    Unavailable(String),
    #[error("stored applications could not be decoded: {0}")]
    Corrupt(String),
    #[error("application could not be written: {0}")]
    Write(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Corrupt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages_match_the_form_copy() {
        assert_eq!(
            ValidationError::ConsentRequired.to_string(),
            "Please verify that you are not a robot"
        );
        assert_eq!(
            ValidationError::MissingField("Email").to_string(),
            "Email is required"
        );
        assert_eq!(
            SubmissionError::AssetUnavailable("404".into()).to_string(),
            "Unable to download brochure. Please ensure the server is running or try again later."
        );
    }
}
