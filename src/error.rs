use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! Status: {status} - {message}")]
    Server { status: StatusCode, message: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ConsoleError {
    /// Text suitable for an alert. Server errors show only the backend's message.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = ConsoleError::Server {
            status: StatusCode::BAD_REQUEST,
            message: "insufficient inventory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP error! Status: 400 Bad Request - insufficient inventory"
        );
        assert_eq!(err.user_message(), "insufficient inventory");
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = ConsoleError::Validation("Please fill out all fields.".to_string());
        assert_eq!(err.user_message(), "Please fill out all fields.");
    }
}
