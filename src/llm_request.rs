use crate::config::Config;
use crate::consts;
use crate::models::Role;
use crate::models::request::{ChatCompletionCreate, Message};
use crate::models::response::ChatCompletion;

/// The code is appended verbatim; nothing is truncated or escaped here.
pub(crate) fn build_review_prompt(code: &str) -> String {
    format!("{}{}", consts::REVIEW_PROMPT_HEADER, code)
}

pub(crate) fn build_review_request(code: &str, config: &Config) -> ChatCompletionCreate {
    ChatCompletionCreate {
        model: config.model.clone(),
        messages: vec![Message {
            role: Role::User,
            content: build_review_prompt(code),
        }],
        temperature: config.temperature,
        max_tokens: Some(config.max_tokens),
    }
}

/// Takes the first choice's text. An empty completion is benign and maps
/// to a fixed placeholder instead of an error.
pub(crate) fn extract_feedback(completion: ChatCompletion) -> String {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| consts::NO_FEEDBACK_PLACEHOLDER.to_string())
}
