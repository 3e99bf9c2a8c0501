use async_trait::async_trait;

use super::errors::DesignError;

/// Service port for asking a generative model to describe a system design.
///
/// Returns the raw model text; extracting the graph is the caller's job.
#[async_trait]
pub trait DesignGeneratorService: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, DesignError>;
}
