use reqwest::Client;
use serde_json::Value;

use crate::client::REQUEST_TIMEOUT;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Shared Gemini (generative language API) HTTP client configuration.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            model,
        }
    }

    /// Returns the generateContent endpoint URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Concatenates the text parts of the first candidate.
    pub fn first_candidate_text(data: &Value) -> Option<String> {
        let parts = data["candidates"]
            .as_array()?
            .first()?
            .get("content")?
            .get("parts")?
            .as_array()?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }
}
