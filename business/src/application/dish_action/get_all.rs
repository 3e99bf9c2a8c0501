use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dish_action::errors::DishActionError;
use crate::domain::dish_action::model::ActionRecord;
use crate::domain::dish_action::repository::DishActionRepository;
use crate::domain::dish_action::use_cases::get_all::{
    GetAllDishActionsParams, GetAllDishActionsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::user::repository::UserRepository;

pub struct GetAllDishActionsUseCaseImpl {
    pub repository: Arc<dyn DishActionRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllDishActionsUseCase for GetAllDishActionsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllDishActionsParams,
    ) -> Result<Vec<ActionRecord>, DishActionError> {
        self.logger
            .info(&format!("Listing dish actions for user {}", params.user_id));

        if self
            .user_repository
            .find_by_id(&params.user_id)
            .await?
            .is_none()
        {
            return Err(DishActionError::UserNotFound);
        }

        let actions = self.repository.get_all(&params.user_id).await?;
        self.logger.debug(&format!("Found {} actions", actions.len()));
        Ok(actions)
    }
}
