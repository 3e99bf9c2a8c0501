use async_trait::async_trait;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::DishSuggestions;

pub struct RecommendDishesParams {
    pub query: String,
}

#[async_trait]
pub trait RecommendDishesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RecommendDishesParams,
    ) -> Result<DishSuggestions, RecommendationError>;
}
