//! Lead domain — "hire us" requests.

#[cfg(feature = "http")]
pub mod client;

use crate::error::SdkError;
use crate::shared::{is_valid_email, SubmissionStatus, GENERIC_FAILURE_MESSAGE};
use serde::{Deserialize, Serialize};

/// Message shown after a lead is accepted.
pub const SUCCESS_MESSAGE: &str = "We received your request. We’ll be in touch.";

/// Request payload for `POST /leads`.
///
/// `current_tools` and `message` are free text and are sent exactly as
/// typed. The default value is the blank form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub current_tools: String,
    pub message: String,
}

impl LeadRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn current_tools(mut self, current_tools: impl Into<String>) -> Self {
        self.current_tools = current_tools.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Form-level check: name and email are required, the rest is optional.
    /// The HTTP layer never calls this; callers gate on it.
    pub fn validate(&self) -> Result<(), SdkError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if !missing.is_empty() {
            return Err(SdkError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
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
