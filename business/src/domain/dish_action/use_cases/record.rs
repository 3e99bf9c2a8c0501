use async_trait::async_trait;

use crate::domain::dish_action::errors::DishActionError;
use crate::domain::dish_action::model::ActionWriteOutcome;
use crate::domain::dish_action::value_objects::ActionKind;
use crate::domain::shared::value_objects::UserId;

pub struct RecordDishActionParams {
    pub user_id: UserId,
    pub dish_name: String,
    pub action: ActionKind,
}

#[async_trait]
pub trait RecordDishActionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RecordDishActionParams,
    ) -> Result<ActionWriteOutcome, DishActionError>;
}
