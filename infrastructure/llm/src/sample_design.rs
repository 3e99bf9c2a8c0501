use async_trait::async_trait;
use serde_json::json;

use business::domain::design::errors::DesignError;
use business::domain::design::services::DesignGeneratorService;

/// Answers every prompt with a fixed five-node web architecture.
/// Wired in when no generative-language API key is configured.
pub struct SampleDesignGenerator;

#[async_trait]
impl DesignGeneratorService for SampleDesignGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, DesignError> {
        let sample = json!({
            "nodes": {
                "frontend": {"name": "Frontend", "tech": "React", "description": "Client-side UI"},
                "api": {"name": "API Gateway", "tech": "Axum,Nginx", "description": "External API endpoints"},
                "auth": {"name": "Auth Service", "tech": "OAuth2,JWT", "description": "Authentication & tokens"},
                "db": {"name": "Primary DB", "tech": "Postgres", "description": "Relational storage"},
                "cache": {"name": "Cache", "tech": "Redis", "description": "Caching layer for performance"}
            },
            "connections": ["frontend->api", "api->auth", "api->db", "api->cache"]
        });

        serde_json::to_string(&sample).map_err(|_| DesignError::GenerationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::design::extractor::extract_design;

    #[tokio::test]
    async fn should_produce_extractable_design() {
        let text = SampleDesignGenerator.generate("anything").await.unwrap();

        let design = extract_design(&text).unwrap();

        assert_eq!(design.nodes.len(), 5);
        assert_eq!(design.edges.len(), 4);
        assert_eq!(design.nodes["api"].tech, vec!["Axum", "Nginx"]);
    }
}
