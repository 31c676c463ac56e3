use crate::error::*;
use tracing::{error, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        if let CoreError::RedditApi(e) = self {
            error!("Reddit API error details: {:?}", e);
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::InvalidProfileUrl { url } => {
                format!(
                    "'{url}' does not look like a Reddit profile URL. \
                     Expected reddit.com/user/<name> or reddit.com/u/<name>."
                )
            }
            CoreError::RedditApi(RedditApiError::UserNotFound { username }) => {
                format!("Reddit user '{username}' was not found.")
            }
            CoreError::RedditApi(RedditApiError::RateLimitExceeded { retry_after }) => {
                format!("Reddit is rate limiting requests. Try again in {retry_after} seconds.")
            }
            CoreError::RedditApi(_) => {
                "Reddit did not return the requested data. The account may be \
                 suspended or private."
                    .to_string()
            }
            CoreError::Network(_) => {
                "Could not reach Reddit. Check your network connection.".to_string()
            }
            CoreError::Io(_) => "Could not write the persona file.".to_string(),
            _ => format!("Unexpected error: {self}"),
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::RedditApi(_) => "REDDIT_API",
            CoreError::InvalidProfileUrl { .. } => "INVALID_URL",
            CoreError::Io(_) => "IO",
            CoreError::Serialization(_) => "SERIALIZATION",
            CoreError::Network(_) => "NETWORK",
            CoreError::InvalidInput { .. } => "INVALID_INPUT",
            CoreError::Internal { .. } => "INTERNAL",
        }
        .to_string()
    }
}
