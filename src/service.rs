use std::time::Duration;

use crate::config::Config;
use crate::errors::ReviewError;
use crate::llm_client::LlmClient;
use crate::llm_request;

/// The relay itself: one outbound provider call per invocation, no retry,
/// no caching, no shared mutable state.
pub struct ReviewService {
    llm_client: LlmClient,
    config: Config,
}

impl ReviewService {
    pub fn new(http_client: reqwest::Client, config: Config) -> Self {
        let llm_client = LlmClient::new(
            http_client,
            &config.api_url,
            &config.api_key,
            Duration::from_secs(config.timeout_secs),
        );
        Self { llm_client, config }
    }

    /// Sends `code` to the configured provider and returns the model's
    /// review text. The caller guarantees `code` is non-empty.
    pub async fn review(&self, code: &str) -> Result<String, ReviewError> {
        let request = llm_request::build_review_request(code, &self.config);
        log::debug!(
            "review request: model {}, {} bytes of code",
            self.config.model,
            code.len()
        );

        let completion = self.llm_client.request_chat_completion(&request).await?;

        Ok(llm_request::extract_feedback(completion))
    }
}
