//! Outcome of a form submission, as shown to the visitor.

/// Message shown when any submission fails, whatever the cause.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn from_result<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => SubmissionStatus::Succeeded,
            Err(_) => SubmissionStatus::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded)
    }
}
