use thiserror::Error;

/// Why a submit attempt did not produce a stored lead
#[derive(Error, Debug)]
pub enum FormError {
    /// No store handle was available; nothing was sent
    #[error("Lead store connection unavailable")]
    ConnectionUnavailable,

    #[error("A submission is already in flight")]
    AlreadySubmitting,

    /// A submission outcome arrived with no submission in flight
    #[error("No submission is in flight")]
    NotSubmitting,

    #[error("Form has already been submitted")]
    AlreadySubmitted,

    /// Blocked by the form widgets before reaching the store
    #[error("Invalid form input: {0}")]
    Invalid(#[from] lead_common::Error),

    /// The store rejected the call or could not be reached
    #[error("Lead submission failed: {0}")]
    SubmissionFailed(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
