use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteRecord;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::get_all::{GetAllFavoritesParams, GetAllFavoritesUseCase};
use crate::domain::logger::Logger;
use crate::domain::user::repository::UserRepository;

pub struct GetAllFavoritesUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllFavoritesUseCase for GetAllFavoritesUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllFavoritesParams,
    ) -> Result<Vec<FavoriteRecord>, FavoriteError> {
        self.logger
            .info(&format!("Listing favorites for user {}", params.user_id));

        if self
            .user_repository
            .find_by_id(&params.user_id)
            .await?
            .is_none()
        {
            return Err(FavoriteError::UserNotFound);
        }

        Ok(self.repository.get_all(&params.user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::UserProfile;
    use mockall::mock;

    mock! {
        pub FavoriteRepo {}

        #[async_trait]
        impl FavoriteRepository for FavoriteRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<FavoriteRecord>, RepositoryError>;
            async fn insert(&self, favorite: &FavoriteRecord) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn find_by_id(&self, user_id: &UserId) -> Result<Option<UserProfile>, RepositoryError>;
            async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError>;
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

    #[tokio::test]
    async fn should_return_user_not_found() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_id().returning(|_| Ok(None));
        let mut favorites = MockFavoriteRepo::new();
        favorites.expect_get_all().never();

        let use_case = GetAllFavoritesUseCaseImpl {
            repository: Arc::new(favorites),
            user_repository: Arc::new(users),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllFavoritesParams {
                user_id: UserId::new("USRDEAD0000"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), FavoriteError::UserNotFound));
    }

    #[tokio::test]
    async fn should_propagate_storage_failure_on_lookup() {
        let mut users = MockUserRepo::new();
        users
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetAllFavoritesUseCaseImpl {
            repository: Arc::new(MockFavoriteRepo::new()),
            user_repository: Arc::new(users),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllFavoritesParams {
                user_id: UserId::new("USRDEAD0000"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            FavoriteError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
