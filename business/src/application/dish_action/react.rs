use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dish_action::errors::DishActionError;
use crate::domain::dish_action::use_cases::react::{
    DishReaction, ReactToDishParams, ReactToDishUseCase,
};
use crate::domain::dish_action::use_cases::record::{
    RecordDishActionParams, RecordDishActionUseCase,
};
use crate::domain::dish_action::value_objects::ActionKind;
use crate::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use crate::domain::logger::Logger;
use crate::domain::user::repository::UserRepository;

/// Entry point for a like / dislike / love event on a dish.
///
/// Every reaction is kept as the user's action for the dish; `love`
/// additionally marks the dish as a favorite. The two writes are separate:
/// if the favorite fails, the recorded action stays and the error is returned.
pub struct ReactToDishUseCaseImpl {
    pub user_repository: Arc<dyn UserRepository>,
    pub record_use_case: Arc<dyn RecordDishActionUseCase>,
    pub add_favorite_use_case: Arc<dyn AddFavoriteUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReactToDishUseCase for ReactToDishUseCaseImpl {
    async fn execute(&self, params: ReactToDishParams) -> Result<DishReaction, DishActionError> {
        let action = params
            .action
            .trim()
            .to_lowercase()
            .parse::<ActionKind>()
            .map_err(|e| {
                self.logger.warn(&e);
                DishActionError::InvalidAction
            })?;

        if self
            .user_repository
            .find_by_id(&params.user_id)
            .await?
            .is_none()
        {
            self.logger
                .warn(&format!("Reaction from unknown user {}", params.user_id));
            return Err(DishActionError::UserNotFound);
        }

        let action_outcome = self
            .record_use_case
            .execute(RecordDishActionParams {
                user_id: params.user_id.clone(),
                dish_name: params.dish_name.clone(),
                action,
            })
            .await?;

        let favorite_outcome = if action == ActionKind::Love {
            let outcome = self
                .add_favorite_use_case
                .execute(AddFavoriteParams {
                    user_id: params.user_id.clone(),
                    dish_name: params.dish_name.clone(),
                })
                .await
                .map_err(|e| {
                    self.logger.error(&format!(
                        "Action love on '{}' for user {} was recorded ({:?}) but the favorite failed: {}",
                        params.dish_name, params.user_id, action_outcome, e
                    ));
                    e
                })?;
            Some(outcome)
        } else {
            None
        };

        Ok(DishReaction {
            action,
            action_outcome,
            favorite_outcome,
        })
    }
}
