use std::sync::Arc;

use sqlx::PgPool;

use logger::TracingLogger;
use persistence::dish_action::repository::DishActionRepositoryPostgres;
use persistence::favorite::repository::FavoriteRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use llm::client::OpenAIClient;
use llm::design_generator::DesignGeneratorGemini;
use llm::dish_recommender::DishRecommenderOpenAI;
use llm::gemini_client::GeminiClient;
use llm::sample_design::SampleDesignGenerator;

use business::application::design::generate::GenerateDesignUseCaseImpl;
use business::application::dish_action::get_all::GetAllDishActionsUseCaseImpl;
use business::application::dish_action::react::ReactToDishUseCaseImpl;
use business::application::dish_action::record::RecordDishActionUseCaseImpl;
use business::application::favorite::add::AddFavoriteUseCaseImpl;
use business::application::favorite::get_all::GetAllFavoritesUseCaseImpl;
use business::application::recommendation::recommend::RecommendDishesUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;
use business::domain::design::services::DesignGeneratorService;
use business::domain::design::use_cases::generate::GenerateDesignUseCase;
use business::domain::dish_action::use_cases::get_all::GetAllDishActionsUseCase;
use business::domain::dish_action::use_cases::react::ReactToDishUseCase;
use business::domain::favorite::use_cases::add::AddFavoriteUseCase;
use business::domain::favorite::use_cases::get_all::GetAllFavoritesUseCase;
use business::domain::recommendation::services::NoImageLookup;
use business::domain::recommendation::use_cases::recommend::RecommendDishesUseCase;
use business::domain::user::use_cases::register::RegisterUserUseCase;

use crate::config::gemini_config::GeminiConfig;
use crate::config::openai_config::OpenAIConfig;

/// Use cases backed by the database.
pub struct StorageContainer {
    pub register_use_case: Arc<dyn RegisterUserUseCase>,
    pub react_use_case: Arc<dyn ReactToDishUseCase>,
    pub add_favorite_use_case: Arc<dyn AddFavoriteUseCase>,
    pub get_all_favorites_use_case: Arc<dyn GetAllFavoritesUseCase>,
    pub get_all_dish_actions_use_case: Arc<dyn GetAllDishActionsUseCase>,
}

impl StorageContainer {
    pub fn new(pool: PgPool) -> Self {
        let user_logger = Arc::new(TracingLogger::new("user"));
        let dish_logger = Arc::new(TracingLogger::new("dish_action"));
        let favorite_logger = Arc::new(TracingLogger::new("favorite"));

        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let dish_action_repository = Arc::new(DishActionRepositoryPostgres::new(pool.clone()));
        let favorite_repository = Arc::new(FavoriteRepositoryPostgres::new(pool));

        // User use cases
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            repository: user_repository.clone(),
            logger: user_logger,
        });

        // Favorite use cases
        let add_favorite_use_case = Arc::new(AddFavoriteUseCaseImpl {
            repository: favorite_repository.clone(),
            logger: favorite_logger.clone(),
        });
        let get_all_favorites_use_case = Arc::new(GetAllFavoritesUseCaseImpl {
            repository: favorite_repository,
            user_repository: user_repository.clone(),
            logger: favorite_logger,
        });

        // Dish action use cases
        let record_use_case = Arc::new(RecordDishActionUseCaseImpl {
            repository: dish_action_repository.clone(),
            logger: dish_logger.clone(),
        });
        let react_use_case = Arc::new(ReactToDishUseCaseImpl {
            user_repository: user_repository.clone(),
            record_use_case,
            add_favorite_use_case: add_favorite_use_case.clone(),
            logger: dish_logger.clone(),
        });
        let get_all_dish_actions_use_case = Arc::new(GetAllDishActionsUseCaseImpl {
            repository: dish_action_repository,
            user_repository,
            logger: dish_logger,
        });

        Self {
            register_use_case,
            react_use_case,
            add_favorite_use_case,
            get_all_favorites_use_case,
            get_all_dish_actions_use_case,
        }
    }
}

/// Recommendation use case over the OpenAI-compatible recommender.
/// No image source is configured, so every suggestion ends up without an image.
pub fn recommend_use_case(config: OpenAIConfig) -> Arc<dyn RecommendDishesUseCase> {
    let mut client = OpenAIClient::new(config.api_key, config.model);
    if let Some(base_url) = config.base_url {
        client = client.with_base_url(base_url);
    }

    Arc::new(RecommendDishesUseCaseImpl {
        recommender: Arc::new(DishRecommenderOpenAI::new(client)),
        image_lookup: Arc::new(NoImageLookup),
        logger: Arc::new(TracingLogger::new("recommendation")),
    })
}

/// Design use case over Gemini, or over the built-in sample without a key.
pub fn design_use_case(config: Option<GeminiConfig>) -> Arc<dyn GenerateDesignUseCase> {
    let generator: Arc<dyn DesignGeneratorService> = match config {
        Some(config) => Arc::new(DesignGeneratorGemini::new(GeminiClient::new(
            config.api_key,
            config.model,
        ))),
        None => {
            tracing::warn!("GEMINI_API_KEY not set, serving the sample design");
            Arc::new(SampleDesignGenerator)
        }
    };

    Arc::new(GenerateDesignUseCaseImpl {
        generator,
        logger: Arc::new(TracingLogger::new("design")),
    })
}
