use serde::{self, Deserialize, Serialize};

/// Inbound body of `POST /api/review`. `code` stays optional so that a
/// missing field reaches the handler instead of bouncing at the JSON
/// extractor; the handler owns the rejection and its error shape.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReviewRequest {
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReviewResponse {
    pub feedback: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
}
