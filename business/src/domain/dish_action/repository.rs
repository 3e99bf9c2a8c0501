use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{ActionRecord, ActionWriteOutcome};

#[async_trait]
pub trait DishActionRepository: Send + Sync {
    /// Most recent first.
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<ActionRecord>, RepositoryError>;
    /// Inserts the record, or replaces action and timestamp of the stored one
    /// for the same (user, dish) pair when the action differs.
    /// Must follow [`ActionWriteOutcome::decide`] as a single atomic step.
    async fn record(&self, record: &ActionRecord) -> Result<ActionWriteOutcome, RepositoryError>;
}
