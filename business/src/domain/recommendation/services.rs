use async_trait::async_trait;

use super::errors::{ImageLookupError, RecommendationError};

/// Service port for asking a language model for dishes matching a query.
///
/// Implementations return the model's raw text, expected to be a numbered
/// list of `N. Name - Description` lines.
#[async_trait]
pub trait DishRecommenderService: Send + Sync {
    async fn recommend(&self, query: &str) -> Result<String, RecommendationError>;
}

/// Service port for finding a picture of a dish.
#[async_trait]
pub trait ImageLookupService: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Option<String>, ImageLookupError>;
}

/// Image lookup used when no image source is configured.
pub struct NoImageLookup;

#[async_trait]
impl ImageLookupService for NoImageLookup {
    async fn lookup(&self, _query: &str) -> Result<Option<String>, ImageLookupError> {
        Ok(None)
    }
}
