use chrono::{DateTime, Utc};

use super::errors::FavoriteError;
use crate::domain::shared::dish_name::normalize_dish_name;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct FavoriteRecord {
    pub user_id: UserId,
    pub dish_name: String,
    pub added_at: DateTime<Utc>,
}

impl FavoriteRecord {
    pub fn new(user_id: UserId, dish_name: &str) -> Result<Self, FavoriteError> {
        Ok(Self {
            user_id,
            dish_name: normalize_dish_name(dish_name)?,
            added_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(user_id: UserId, dish_name: String, added_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            dish_name,
            added_at,
        }
    }
}

/// Result of adding a favorite. Both variants count as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    AlreadyFavorite,
}
