use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::design::errors::DesignError;
use business::domain::design::services::DesignGeneratorService;

use crate::gemini_client::GeminiClient;

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that outputs only JSON describing system architecture nodes and connections.";

const DESIGN_INSTRUCTION: &str = r#"You are an assistant that outputs a system design as JSON ONLY. Do NOT include extra explanation.
Return a JSON object with:
{
  "nodes": {
     "<node_id>": {
        "name": "<display name>",
        "tech": "<comma separated tech/tags>",
        "description": "<short description>",
        "x": 120,
        "y": 200
     }
  },
  "connections": [
     "node1->node2",
     {"from": "nodeA", "to": "nodeB"}
  ]
}
Make node ids short, lowercased, no spaces (e.g., "auth", "api", "db")."#;

pub struct DesignGeneratorGemini {
    client: GeminiClient,
}

impl DesignGeneratorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_prompt(user_prompt: &str) -> String {
        format!("{}\n\nUser request:\n{}", DESIGN_INSTRUCTION, user_prompt)
    }

    fn build_body(user_prompt: &str) -> Value {
        json!({
            "systemInstruction": {"parts": [{"text": SYSTEM_PROMPT}]},
            "contents": [
                {"role": "user", "parts": [{"text": Self::build_prompt(user_prompt)}]}
            ],
            "generationConfig": {
                "temperature": 0.1,
                "maxOutputTokens": 800,
            },
        })
    }
}

#[async_trait]
impl DesignGeneratorService for DesignGeneratorGemini {
    async fn generate(&self, prompt: &str) -> Result<String, DesignError> {
        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.client.api_key)
            .json(&Self::build_body(prompt))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Design generation request failed: {e}");
                DesignError::GenerationFailed
            })?;

        if !response.status().is_success() {
            tracing::error!("Design generation returned {}", response.status());
            return Err(DesignError::GenerationFailed);
        }

        let data: Value = response
            .json()
            .await
            .map_err(|_| DesignError::GenerationFailed)?;

        GeminiClient::first_candidate_text(&data).ok_or(DesignError::GenerationFailed)
    }
}
