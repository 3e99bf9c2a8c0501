use chrono::{DateTime, Utc};
use serde::Serialize;

use business::domain::favorite::model::{FavoriteOutcome, FavoriteRecord};

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteOutcomeDto {
    Added,
    AlreadyFavorite,
}

impl From<FavoriteOutcome> for FavoriteOutcomeDto {
    fn from(o: FavoriteOutcome) -> Self {
        match o {
            FavoriteOutcome::Added => FavoriteOutcomeDto::Added,
            FavoriteOutcome::AlreadyFavorite => FavoriteOutcomeDto::AlreadyFavorite,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddFavoriteResponse {
    pub dish_name: String,
    pub outcome: FavoriteOutcomeDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteResponse {
    pub dish_name: String,
    pub added_at: DateTime<Utc>,
}

impl From<FavoriteRecord> for FavoriteResponse {
    fn from(f: FavoriteRecord) -> Self {
        Self {
            dish_name: f.dish_name,
            added_at: f.added_at,
        }
    }
}
