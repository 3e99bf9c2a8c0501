use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::UserProfile;
use business::domain::user::value_objects::Gender;

#[derive(Debug, FromRow)]
pub struct UserProfileEntity {
    pub user_id: String,
    pub display_name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub age: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl UserProfileEntity {
    pub fn into_domain(self) -> UserProfile {
        let gender = self.gender.parse::<Gender>().unwrap_or_else(|e| {
            tracing::warn!("{e} on profile {}, reading as male", self.user_id);
            Gender::Male
        });

        UserProfile::from_repository(
            UserId::new(self.user_id),
            self.display_name,
            gender,
            self.date_of_birth,
            u32::try_from(self.age).unwrap_or(0),
            self.latitude,
            self.longitude,
            self.created_at,
        )
    }
}
