use std::fmt;

#[derive(Debug, Clone)]
pub enum ReviewError {
    Timeout,
    ApiError(String),
    NetworkError(String),
    ParseError(String),
    ConfigError(String),
}

impl fmt::Display for ReviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewError::Timeout => write!(f, "Timeout error: provider call exceeded the bound"),
            ReviewError::ApiError(msg) => write!(f, "API error: {}", msg),
            ReviewError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ReviewError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ReviewError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for ReviewError {}

impl From<reqwest::Error> for ReviewError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ReviewError::Timeout
        } else if err.is_connect() {
            ReviewError::NetworkError(err.to_string())
        } else if err.is_decode() {
            ReviewError::ParseError(err.to_string())
        } else {
            ReviewError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ReviewError {
    fn from(err: serde_json::Error) -> Self {
        ReviewError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for ReviewError {
    fn from(err: std::io::Error) -> Self {
        ReviewError::ConfigError(err.to_string())
    }
}
