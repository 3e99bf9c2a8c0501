use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteOutcome;
use crate::domain::shared::value_objects::UserId;

pub struct AddFavoriteParams {
    pub user_id: UserId,
    pub dish_name: String,
}

#[async_trait]
pub trait AddFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: AddFavoriteParams) -> Result<FavoriteOutcome, FavoriteError>;
}
