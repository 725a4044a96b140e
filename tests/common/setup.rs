use std::sync::Arc;

use reqwest::Client;

use code_review_relay::config::Config;
use code_review_relay::service::ReviewService;

pub fn create_test_config(api_url: String) -> Config {
    Config {
        api_url,
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
        max_tokens: 500,
        temperature: 0.3,
        timeout_secs: 1,
    }
}

pub fn create_test_service(api_url: String) -> Arc<ReviewService> {
    Arc::new(ReviewService::new(Client::new(), create_test_config(api_url)))
}
