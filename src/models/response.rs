use serde::{self, Deserialize, Serialize};

// Parsed leniently: a response with no choices or no content is a valid
// empty completion, not a parse failure. Unknown provider fields (id,
// usage, finish_reason) are ignored.

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AssistantMessage {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Choice {
    #[serde(default)]
    pub index: i32,
    #[serde(default)]
    pub message: AssistantMessage,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
}
