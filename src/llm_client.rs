use std::time::Duration;

use crate::errors::ReviewError;
use crate::models::request::ChatCompletionCreate;
use crate::models::response::ChatCompletion;

pub struct LlmClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl LlmClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            timeout,
        }
    }

    pub async fn request_chat_completion(
        &self,
        request: &ChatCompletionCreate,
    ) -> Result<ChatCompletion, ReviewError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, "/chat/completions"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(self.timeout)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ReviewError::ApiError(format!(
                "status {status}, body {text}"
            )));
        }

        Ok(response.json::<ChatCompletion>().await?)
    }
}
