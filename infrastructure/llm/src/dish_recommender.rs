use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::recommendation::errors::RecommendationError;
use business::domain::recommendation::services::DishRecommenderService;

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = r#"You are a food recommender.
Suggest only the top 2-3 dishes with their names and descriptions.
If the input is already a food name, suggest varieties of that food; otherwise recommend food matching the request.
Do not recommend vegetarian dishes when the request is non-vegetarian, or non-vegetarian dishes when it is vegetarian.
Do not add any extra information and do not use emojis.
Answer with plain text only, one dish per line, in exactly this format:
1. Dish name - Short description"#;

pub struct DishRecommenderOpenAI {
    client: OpenAIClient,
}

impl DishRecommenderOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_body(&self, query: &str) -> Value {
        json!({
            "model": self.client.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": query},
            ],
            "temperature": 0.7,
            "max_tokens": 400,
        })
    }

    fn extract_content(data: &Value) -> Option<&str> {
        data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
    }
}

#[async_trait]
impl DishRecommenderService for DishRecommenderOpenAI {
    async fn recommend(&self, query: &str) -> Result<String, RecommendationError> {
        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&self.build_body(query))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Dish recommendation request failed: {e}");
                RecommendationError::GenerationFailed
            })?;

        if !response.status().is_success() {
            tracing::error!("Dish recommendation returned {}", response.status());
            return Err(RecommendationError::GenerationFailed);
        }

        let data: Value = response
            .json()
            .await
            .map_err(|_| RecommendationError::GenerationFailed)?;

        Self::extract_content(&data)
            .map(str::to_string)
            .ok_or(RecommendationError::GenerationFailed)
    }
}
