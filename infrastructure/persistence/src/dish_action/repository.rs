use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::dish_action::model::{ActionRecord, ActionWriteOutcome};
use business::domain::dish_action::repository::DishActionRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::ActionRecordEntity;
use crate::db::{map_read_error, map_write_error};

/// Insert, or replace a differing action, in one statement. No row comes back
/// when the stored action already matches; `xmax = 0` marks a fresh insert.
const RECORD_ACTION_SQL: &str = r#"INSERT INTO dish_actions (user_id, dish_name, action, recorded_at)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (user_id, dish_name) DO UPDATE SET
        action = EXCLUDED.action,
        recorded_at = EXCLUDED.recorded_at
    WHERE dish_actions.action IS DISTINCT FROM EXCLUDED.action
    RETURNING (xmax = 0) AS inserted"#;

pub struct DishActionRepositoryPostgres {
    pool: PgPool,
}

impl DishActionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DishActionRepository for DishActionRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<ActionRecord>, RepositoryError> {
        let entities = sqlx::query_as::<_, ActionRecordEntity>(
            "SELECT user_id, dish_name, action, recorded_at FROM dish_actions WHERE user_id = $1 ORDER BY recorded_at DESC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(entities
            .into_iter()
            .filter_map(|e| e.into_domain())
            .collect())
    }

    async fn record(&self, record: &ActionRecord) -> Result<ActionWriteOutcome, RepositoryError> {
        let inserted = sqlx::query_scalar::<_, bool>(RECORD_ACTION_SQL)
            .bind(record.user_id.as_str())
            .bind(&record.dish_name)
            .bind(record.action.to_string())
            .bind(record.recorded_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?;

        Ok(match inserted {
            Some(true) => ActionWriteOutcome::Inserted,
            Some(false) => ActionWriteOutcome::Updated,
            None => ActionWriteOutcome::Unchanged,
        })
    }
}
