/// Message used when neither the server nor the transport explains a failure.
pub const UNKNOWN_ERROR: &str = "unknown error";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No session token is stored; raised before any request is sent.
    #[error("No valid token found. Please log in.")]
    NoToken,

    #[error("request failed: {message}")]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },

    #[error("unexpected response format: {0}")]
    UnexpectedResponse(#[source] serde_json::Error),

    #[error("Login failed. Invalid credentials.")]
    LoginFailed,

    #[error("Invalid JWT token structure.")]
    InvalidToken,

    #[error("{0}")]
    Unauthorized(String),

    #[error("Personal Trainer not set. Please check your trainer details.")]
    TrainerNotSet,

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }

    pub(crate) fn transport(err: reqwest::Error) -> Self {
        let message = err.to_string();
        ApiError::RequestFailed {
            status: err.status().map(|s| s.as_u16()),
            message: if message.trim().is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                message
            },
        }
    }
}
