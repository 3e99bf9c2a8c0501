use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::FavoriteRecord;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Most recent first.
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<FavoriteRecord>, RepositoryError>;
    /// Inserts a favorite. Returns `Duplicated` when the (user, dish) pair is
    /// already stored; the stored record is left untouched.
    async fn insert(&self, favorite: &FavoriteRecord) -> Result<(), RepositoryError>;
}
