use async_trait::async_trait;

use crate::domain::dish_action::errors::DishActionError;
use crate::domain::dish_action::model::ActionRecord;
use crate::domain::shared::value_objects::UserId;

pub struct GetAllDishActionsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAllDishActionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllDishActionsParams,
    ) -> Result<Vec<ActionRecord>, DishActionError>;
}
