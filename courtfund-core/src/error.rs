use thiserror::Error;

pub type Result<T> = std::result::Result<T, CourtfundError>;

#[derive(Error, Debug)]
pub enum CourtfundError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Payment error: {0}")]
    Payment(String),

    #[error("Invalid payment request: {0}")]
    InvalidRequest(String),

    #[error("No participants to draw from")]
    NoParticipants,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CourtfundError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn payment(msg: impl Into<String>) -> Self {
        Self::Payment(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

// conversion from dialoguer::Error
impl From<dialoguer::Error> for CourtfundError {
    fn from(err: dialoguer::Error) -> Self {
        CourtfundError::Dialog(err.to_string())
    }
}
