use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUserProfileProps, UserProfile};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

const MAX_ID_ATTEMPTS: usize = 5;

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<UserProfile, UserError> {
        self.logger
            .info(&format!("Registering user: {}", params.display_name));

        let today = Utc::now().date_naive();

        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = UserId::generate();
            if self.repository.find_by_id(&candidate).await?.is_some() {
                self.logger
                    .debug(&format!("User id {} already taken, retrying", candidate));
                continue;
            }

            let profile = UserProfile::new(
                NewUserProfileProps {
                    user_id: candidate,
                    display_name: params.display_name.clone(),
                    gender: params.gender,
                    date_of_birth: params.date_of_birth,
                    latitude: params.latitude,
                    longitude: params.longitude,
                },
                today,
            )?;

            match self.repository.save(&profile).await {
                Ok(()) => {
                    self.logger
                        .info(&format!("User registered: {}", profile.user_id));
                    return Ok(profile);
                }
                // Lost a race for the same id
                Err(RepositoryError::Duplicated) => continue,
                Err(other) => return Err(other.into()),
            }
        }

        self.logger.error("Could not allocate a unique user id");
        Err(UserError::IdExhausted)
    }
}
