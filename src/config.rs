use crate::consts;
use crate::errors::ReviewError;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: i32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Config {
    /// Builds a config from an arbitrary variable lookup. The lookup is
    /// injected so tests can run without touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ReviewError> {
        let api_key = lookup("LLM_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ReviewError::ConfigError("LLM_API_KEY is not set".to_string()))?;

        let api_url =
            lookup("LLM_API_URL").unwrap_or_else(|| consts::DEFAULT_API_URL.to_string());
        let model = lookup("LLM_MODEL").unwrap_or_else(|| consts::DEFAULT_MODEL.to_string());

        let max_tokens = parse_var("LLM_MAX_TOKENS", lookup("LLM_MAX_TOKENS"), consts::DEFAULT_MAX_TOKENS)?;
        let temperature = parse_var(
            "LLM_TEMPERATURE",
            lookup("LLM_TEMPERATURE"),
            consts::DEFAULT_TEMPERATURE,
        )?;
        let timeout_secs = parse_var(
            "LLM_TIMEOUT_SECS",
            lookup("LLM_TIMEOUT_SECS"),
            consts::DEFAULT_TIMEOUT_SECS,
        )?;

        Ok(Config {
            api_url,
            api_key,
            model,
            max_tokens,
            temperature,
            timeout_secs,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &str,
    value: Option<String>,
    default: T,
) -> Result<T, ReviewError> {
    match value {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ReviewError::ConfigError(format!("invalid value for {name}: {raw}"))),
        None => Ok(default),
    }
}

pub fn load_config() -> Result<Config, ReviewError> {
    Config::from_lookup(|name| std::env::var(name).ok())
}
