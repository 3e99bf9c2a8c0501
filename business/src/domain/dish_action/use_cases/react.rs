use async_trait::async_trait;

use crate::domain::dish_action::errors::DishActionError;
use crate::domain::dish_action::model::ActionWriteOutcome;
use crate::domain::dish_action::value_objects::ActionKind;
use crate::domain::favorite::model::FavoriteOutcome;
use crate::domain::shared::value_objects::UserId;

pub struct ReactToDishParams {
    pub user_id: UserId,
    pub dish_name: String,
    /// Raw action name as sent by the client (`like`, `dislike`, `love`).
    pub action: String,
}

/// What a reaction changed.
#[derive(Debug, Clone)]
pub struct DishReaction {
    pub action: ActionKind,
    pub action_outcome: ActionWriteOutcome,
    /// Only set for `love`.
    pub favorite_outcome: Option<FavoriteOutcome>,
}

#[async_trait]
pub trait ReactToDishUseCase: Send + Sync {
    async fn execute(&self, params: ReactToDishParams) -> Result<DishReaction, DishActionError>;
}
