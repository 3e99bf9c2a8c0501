use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::{FavoriteOutcome, FavoriteRecord};
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use crate::domain::logger::Logger;

pub struct AddFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddFavoriteUseCase for AddFavoriteUseCaseImpl {
    async fn execute(&self, params: AddFavoriteParams) -> Result<FavoriteOutcome, FavoriteError> {
        let favorite = FavoriteRecord::new(params.user_id, &params.dish_name)?;

        self.logger.info(&format!(
            "Adding favorite '{}' for user {}",
            favorite.dish_name, favorite.user_id
        ));

        match self.repository.insert(&favorite).await {
            Ok(()) => Ok(FavoriteOutcome::Added),
            // Only the uniqueness conflict is swallowed
            Err(RepositoryError::Duplicated) => {
                self.logger.debug(&format!(
                    "'{}' is already a favorite, skipping",
                    favorite.dish_name
                ));
                Ok(FavoriteOutcome::AlreadyFavorite)
            }
            Err(other) => Err(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use std::sync::Mutex;

    mock! {
        pub FavoriteRepo {}

        #[async_trait]
        impl FavoriteRepository for FavoriteRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<FavoriteRecord>, RepositoryError>;
            async fn insert(&self, favorite: &FavoriteRecord) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    /// Enforces the (user, dish) uniqueness constraint like the database does.
    #[derive(Default)]
    struct InMemoryFavorites {
        rows: Mutex<Vec<FavoriteRecord>>,
    }

    #[async_trait]
    impl FavoriteRepository for InMemoryFavorites {
        async fn get_all(&self, user_id: &UserId) -> Result<Vec<FavoriteRecord>, RepositoryError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .filter(|r| &r.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn insert(&self, favorite: &FavoriteRecord) -> Result<(), RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            if rows
                .iter()
                .any(|r| r.user_id == favorite.user_id && r.dish_name == favorite.dish_name)
            {
                return Err(RepositoryError::Duplicated);
            }
            rows.push(favorite.clone());
            Ok(())
        }
    }

    fn params(dish_name: &str) -> AddFavoriteParams {
        AddFavoriteParams {
            user_id: UserId::new("USRFEED0001"),
            dish_name: dish_name.to_string(),
        }
    }

    #[tokio::test]
    async fn should_add_new_favorite() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo.expect_insert().times(1).returning(|_| Ok(()));

        let use_case = AddFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Vada Pav")).await;

        assert_eq!(result.unwrap(), FavoriteOutcome::Added);
    }

    #[tokio::test]
    async fn should_treat_duplicate_as_success() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = AddFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Vada Pav")).await;

        assert_eq!(result.unwrap(), FavoriteOutcome::AlreadyFavorite);
    }

    #[tokio::test]
    async fn should_propagate_other_storage_errors() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = AddFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Vada Pav")).await;

        assert!(matches!(
            result.unwrap_err(),
            FavoriteError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_keep_single_record_when_added_twice() {
        let store = Arc::new(InMemoryFavorites::default());
        let use_case = AddFavoriteUseCaseImpl {
            repository: store.clone(),
            logger: mock_logger(),
        };

        let first = use_case.execute(params("Vada Pav")).await.unwrap();
        let added_at = store.rows.lock().unwrap()[0].added_at;
        let second = use_case.execute(params(" Vada Pav ")).await.unwrap();

        let rows = store.get_all(&UserId::new("USRFEED0001")).await.unwrap();
        assert_eq!(first, FavoriteOutcome::Added);
        assert_eq!(second, FavoriteOutcome::AlreadyFavorite);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].added_at, added_at);
    }
}
