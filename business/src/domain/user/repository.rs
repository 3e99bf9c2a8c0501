use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::UserProfile;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<UserProfile>, RepositoryError>;
    /// Inserts a new profile. Returns `Duplicated` if the id is already taken.
    async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError>;
}
