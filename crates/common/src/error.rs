use thiserror::Error;

/// Rejections of lead data, by the form widgets or by the store
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Unknown challenge: {0}")]
    UnknownChallenge(String),
}

pub type Result<T> = std::result::Result<T, Error>;
