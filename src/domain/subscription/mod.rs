//! Subscription domain — newsletter sign-ups.

#[cfg(feature = "http")]
pub mod client;

use crate::error::SdkError;
use crate::shared::{is_valid_email, SubmissionStatus, GENERIC_FAILURE_MESSAGE};
use serde::{Deserialize, Serialize};

/// Message shown after a successful sign-up.
pub const SUCCESS_MESSAGE: &str = "Success! Check your inbox soon.";

/// Request payload for `POST /subscribe`.
///
/// `interests` is always sent, as `[]` when none were chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub email: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl SubscriptionRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            interests: Vec::new(),
        }
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    /// Form-level check. The HTTP layer never calls this; callers gate on it.
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.email.trim().is_empty() {
            return Err(SdkError::Validation("Email is required".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(SdkError::Validation(format!(
                "Invalid email address: {}",
                self.email
            )));
        }
        Ok(())
    }
}

pub fn status_message(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Succeeded => SUCCESS_MESSAGE,
        SubmissionStatus::Failed => GENERIC_FAILURE_MESSAGE,
    }
}
