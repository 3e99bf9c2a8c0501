use chrono::{DateTime, Utc};
use serde::Serialize;

use business::domain::dish_action::model::{ActionRecord, ActionWriteOutcome};
use business::domain::dish_action::use_cases::react::DishReaction;

use crate::commands::favorite::dto::FavoriteOutcomeDto;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ActionWriteOutcomeDto {
    Inserted,
    Updated,
    Unchanged,
}

impl From<ActionWriteOutcome> for ActionWriteOutcomeDto {
    fn from(o: ActionWriteOutcome) -> Self {
        match o {
            ActionWriteOutcome::Inserted => ActionWriteOutcomeDto::Inserted,
            ActionWriteOutcome::Updated => ActionWriteOutcomeDto::Updated,
            ActionWriteOutcome::Unchanged => ActionWriteOutcomeDto::Unchanged,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DishReactionResponse {
    pub action: String,
    pub action_outcome: ActionWriteOutcomeDto,
    /// Present only for `love`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_outcome: Option<FavoriteOutcomeDto>,
}

impl From<DishReaction> for DishReactionResponse {
    fn from(r: DishReaction) -> Self {
        Self {
            action: r.action.to_string(),
            action_outcome: r.action_outcome.into(),
            favorite_outcome: r.favorite_outcome.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DishActionResponse {
    pub dish_name: String,
    pub action: String,
    pub recorded_at: DateTime<Utc>,
}

impl From<ActionRecord> for DishActionResponse {
    fn from(r: ActionRecord) -> Self {
        Self {
            dish_name: r.dish_name,
            action: r.action.to_string(),
            recorded_at: r.recorded_at,
        }
    }
}
