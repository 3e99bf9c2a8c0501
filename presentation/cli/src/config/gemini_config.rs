use llm::gemini_client::DEFAULT_GEMINI_MODEL;

use super::openai_config::non_blank;

/// Configuration for the Gemini design generator. Absent when no key is set.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    /// Environment variables:
    /// - GEMINI_API_KEY (optional)
    /// - GEMINI_MODEL (default: "gemini-1.5-flash")
    pub fn from_env() -> Option<Self> {
        Self::from_parts(
            std::env::var("GEMINI_API_KEY").ok(),
            std::env::var("GEMINI_MODEL").ok(),
        )
    }

    fn from_parts(api_key: Option<String>, model: Option<String>) -> Option<Self> {
        let api_key = non_blank(api_key)?;
        Some(Self {
            api_key,
            model: non_blank(model).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
        })
    }
}
