use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::favorite::model::FavoriteRecord;
use business::domain::favorite::repository::FavoriteRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::FavoriteEntity;
use crate::db::{map_read_error, map_write_error};

pub struct FavoriteRepositoryPostgres {
    pool: PgPool,
}

impl FavoriteRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<FavoriteRecord>, RepositoryError> {
        let entities = sqlx::query_as::<_, FavoriteEntity>(
            "SELECT user_id, dish_name, added_at FROM favorite_dishes WHERE user_id = $1 ORDER BY added_at DESC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn insert(&self, favorite: &FavoriteRecord) -> Result<(), RepositoryError> {
        // A unique violation on (user_id, dish_name) surfaces as `Duplicated`
        sqlx::query(
            "INSERT INTO favorite_dishes (user_id, dish_name, added_at) VALUES ($1, $2, $3)",
        )
        .bind(favorite.user_id.as_str())
        .bind(&favorite.dish_name)
        .bind(favorite.added_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }
}
