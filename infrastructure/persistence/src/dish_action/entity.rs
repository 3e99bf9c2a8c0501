use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::dish_action::model::ActionRecord;
use business::domain::dish_action::value_objects::ActionKind;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ActionRecordEntity {
    pub user_id: String,
    pub dish_name: String,
    pub action: String,
    pub recorded_at: DateTime<Utc>,
}

impl ActionRecordEntity {
    /// Rows holding an unknown action value are dropped.
    pub fn into_domain(self) -> Option<ActionRecord> {
        let action = match self.action.parse::<ActionKind>() {
            Ok(action) => action,
            Err(e) => {
                tracing::warn!("Skipping stored action for '{}': {e}", self.dish_name);
                return None;
            }
        };

        Some(ActionRecord::from_repository(
            UserId::new(self.user_id),
            self.dish_name,
            action,
            self.recorded_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(action: &str) -> ActionRecordEntity {
        ActionRecordEntity {
            user_id: "USR0000BEEF".to_string(),
            dish_name: "Poha".to_string(),
            action: action.to_string(),
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn should_map_known_action() {
        let record = entity("dislike").into_domain().unwrap();

        assert_eq!(record.action, ActionKind::Dislike);
        assert_eq!(record.dish_name, "Poha");
    }

    #[test]
    fn should_drop_unknown_action() {
        assert!(entity("1").into_domain().is_none());
    }
}
