use chrono::{DateTime, Datelike, NaiveDate, Utc};

use super::errors::UserError;
use super::value_objects::Gender;
use crate::domain::shared::value_objects::UserId;

/// Profile data kept for every registered user.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user_id: UserId,
    pub display_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub age: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

pub struct NewUserProfileProps {
    pub user_id: UserId,
    pub display_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl UserProfile {
    pub fn new(props: NewUserProfileProps, today: NaiveDate) -> Result<Self, UserError> {
        if props.display_name.trim().is_empty() {
            return Err(UserError::NameEmpty);
        }
        if props.date_of_birth > today {
            return Err(UserError::BirthDateInFuture);
        }

        Ok(Self {
            user_id: props.user_id,
            display_name: props.display_name.trim().to_string(),
            gender: props.gender,
            age: calculate_age(props.date_of_birth, today),
            date_of_birth: props.date_of_birth,
            latitude: props.latitude,
            longitude: props.longitude,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        user_id: UserId,
        display_name: String,
        gender: Gender,
        date_of_birth: NaiveDate,
        age: u32,
        latitude: Option<f64>,
        longitude: Option<f64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            display_name,
            gender,
            date_of_birth,
            age,
            latitude,
            longitude,
            created_at,
        }
    }
}

/// Whole years elapsed between `date_of_birth` and `today`.
pub fn calculate_age(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}
