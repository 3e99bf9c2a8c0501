use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dish_action::errors::DishActionError;
use crate::domain::dish_action::model::{ActionRecord, ActionWriteOutcome};
use crate::domain::dish_action::repository::DishActionRepository;
use crate::domain::dish_action::use_cases::record::{
    RecordDishActionParams, RecordDishActionUseCase,
};
use crate::domain::logger::Logger;

pub struct RecordDishActionUseCaseImpl {
    pub repository: Arc<dyn DishActionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecordDishActionUseCase for RecordDishActionUseCaseImpl {
    async fn execute(
        &self,
        params: RecordDishActionParams,
    ) -> Result<ActionWriteOutcome, DishActionError> {
        let record = ActionRecord::new(params.user_id, &params.dish_name, params.action)?;

        self.logger.info(&format!(
            "Recording action {} on '{}' for user {}",
            record.action, record.dish_name, record.user_id
        ));

        let outcome = self.repository.record(&record).await?;

        match outcome {
            ActionWriteOutcome::Inserted => self.logger.info(&format!(
                "Action created for '{}' ({})",
                record.dish_name, record.action
            )),
            ActionWriteOutcome::Updated => self.logger.info(&format!(
                "Action for '{}' changed to {}",
                record.dish_name, record.action
            )),
            ActionWriteOutcome::Unchanged => self.logger.debug(&format!(
                "Action for '{}' already {}, nothing to write",
                record.dish_name, record.action
            )),
        }

        Ok(outcome)
    }
}
