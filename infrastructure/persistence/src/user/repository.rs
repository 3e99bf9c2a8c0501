use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::UserProfile;
use business::domain::user::repository::UserRepository;

use super::entity::UserProfileEntity;
use crate::db::{map_read_error, map_write_error};

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<UserProfile>, RepositoryError> {
        let entity = sqlx::query_as::<_, UserProfileEntity>(
            "SELECT user_id, display_name, gender, date_of_birth, age, latitude, longitude, created_at FROM user_profiles WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO user_profiles (user_id, display_name, gender, date_of_birth, age, latitude, longitude, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
        )
        .bind(profile.user_id.as_str())
        .bind(&profile.display_name)
        .bind(profile.gender.to_string())
        .bind(profile.date_of_birth)
        .bind(i32::try_from(profile.age).unwrap_or(i32::MAX))
        .bind(profile.latitude)
        .bind(profile.longitude)
        .bind(profile.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }
}
