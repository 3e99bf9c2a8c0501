use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::favorite::model::FavoriteRecord;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct FavoriteEntity {
    pub user_id: String,
    pub dish_name: String,
    pub added_at: DateTime<Utc>,
}

impl FavoriteEntity {
    pub fn into_domain(self) -> FavoriteRecord {
        FavoriteRecord::from_repository(UserId::new(self.user_id), self.dish_name, self.added_at)
    }
}
