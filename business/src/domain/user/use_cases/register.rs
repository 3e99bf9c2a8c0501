use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;
use crate::domain::user::value_objects::Gender;

pub struct RegisterUserParams {
    pub display_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, params: RegisterUserParams) -> Result<UserProfile, UserError>;
}
