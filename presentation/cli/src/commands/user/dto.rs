use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use business::domain::user::model::UserProfile;
use business::domain::user::value_objects::Gender;

#[derive(Debug, Clone, Serialize)]
pub struct UserProfileResponse {
    /// Public identifier, `USR` followed by 8 hex characters
    pub user_id: String,
    pub display_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(p: UserProfile) -> Self {
        Self {
            user_id: p.user_id.to_string(),
            display_name: p.display_name,
            gender: p.gender,
            date_of_birth: p.date_of_birth,
            age: p.age,
            latitude: p.latitude,
            longitude: p.longitude,
            created_at: p.created_at,
        }
    }
}
