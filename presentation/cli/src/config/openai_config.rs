use anyhow::Context;
use llm::client::DEFAULT_OPENAI_MODEL;

/// Configuration for OpenAI-compatible chat completions.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
}

impl OpenAIConfig {
    /// Environment variables:
    /// - OPENAI_API_KEY (required)
    /// - OPENAI_MODEL (default: "gpt-4o-mini")
    /// - OPENAI_BASE_URL (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY environment variable must be set")?;
        Ok(Self::from_parts(
            api_key,
            std::env::var("OPENAI_MODEL").ok(),
            std::env::var("OPENAI_BASE_URL").ok(),
        ))
    }

    fn from_parts(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            api_key,
            model: non_blank(model).unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            base_url: non_blank(base_url),
        }
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
