use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared OpenAI HTTP client configuration.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl OpenAIClient {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
            model,
        }
    }

    /// Points the client at another OpenAI-compatible server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}
