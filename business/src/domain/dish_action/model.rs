use chrono::{DateTime, Utc};

use super::errors::DishActionError;
use super::value_objects::ActionKind;
use crate::domain::shared::dish_name::normalize_dish_name;
use crate::domain::shared::value_objects::UserId;

/// The single action a user holds for a dish.
#[derive(Debug, Clone)]
pub struct ActionRecord {
    pub user_id: UserId,
    pub dish_name: String,
    pub action: ActionKind,
    pub recorded_at: DateTime<Utc>,
}

impl ActionRecord {
    pub fn new(
        user_id: UserId,
        dish_name: &str,
        action: ActionKind,
    ) -> Result<Self, DishActionError> {
        Ok(Self {
            user_id,
            dish_name: normalize_dish_name(dish_name)?,
            action,
            recorded_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        user_id: UserId,
        dish_name: String,
        action: ActionKind,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            dish_name,
            action,
            recorded_at,
        }
    }
}

/// Effect of recording an action on the stored record for a (user, dish) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionWriteOutcome {
    /// No record existed; one was created.
    Inserted,
    /// The stored action differed; action and timestamp were replaced.
    Updated,
    /// The stored action already matched; nothing was written.
    Unchanged,
}

impl ActionWriteOutcome {
    /// Decides what a write must do given the currently stored action.
    /// Repositories must honour this rule atomically.
    pub fn decide(stored: Option<ActionKind>, requested: ActionKind) -> Self {
        match stored {
            None => ActionWriteOutcome::Inserted,
            Some(current) if current == requested => ActionWriteOutcome::Unchanged,
            Some(_) => ActionWriteOutcome::Updated,
        }
    }
}
