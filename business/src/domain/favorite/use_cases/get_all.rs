use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteRecord;
use crate::domain::shared::value_objects::UserId;

pub struct GetAllFavoritesParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAllFavoritesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllFavoritesParams,
    ) -> Result<Vec<FavoriteRecord>, FavoriteError>;
}
