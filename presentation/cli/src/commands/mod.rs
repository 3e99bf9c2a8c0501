use serde::Serialize;
use serde_json::Value;

use business::domain::design::use_cases::generate::GenerateDesignParams;
use business::domain::dish_action::use_cases::get_all::GetAllDishActionsParams;
use business::domain::dish_action::use_cases::react::ReactToDishParams;
use business::domain::favorite::use_cases::add::AddFavoriteParams;
use business::domain::favorite::use_cases::get_all::GetAllFavoritesParams;
use business::domain::recommendation::use_cases::recommend::RecommendDishesParams;
use business::domain::shared::value_objects::UserId;
use business::domain::user::use_cases::register::RegisterUserParams;

use crate::cli::{ActivityKind, Command};
use crate::config::database_config::init_database;
use crate::config::gemini_config::GeminiConfig;
use crate::config::openai_config::OpenAIConfig;
use crate::setup::dependency_injection::{StorageContainer, design_use_case, recommend_use_case};

pub mod design;
pub mod dish_action;
pub mod error;
pub mod favorite;
pub mod recommendation;
pub mod user;

use dish_action::dto::{DishActionResponse, DishReactionResponse};
use error::{ErrorResponse, IntoErrorResponse};
use favorite::dto::{AddFavoriteResponse, FavoriteResponse};
use user::dto::UserProfileResponse;

/// What a command printed: a success body or a domain error.
/// Configuration and connection problems surface as `anyhow` errors instead.
pub enum CommandOutcome {
    Success(Value),
    Failure(ErrorResponse),
}

impl CommandOutcome {
    fn from_result<T, E>(result: Result<T, E>) -> anyhow::Result<Self>
    where
        T: Serialize,
        E: IntoErrorResponse,
    {
        Ok(match result {
            Ok(body) => CommandOutcome::Success(serde_json::to_value(body)?),
            Err(err) => CommandOutcome::Failure(err.into_error_response()),
        })
    }
}

pub async fn run(command: Command) -> anyhow::Result<CommandOutcome> {
    match command {
        Command::Recommend { query } => {
            let use_case = recommend_use_case(OpenAIConfig::from_env()?);
            let result = use_case.execute(RecommendDishesParams { query }).await;
            CommandOutcome::from_result(result.map(recommendation::dto::to_response))
        }
        Command::Design { prompt } => {
            let use_case = design_use_case(GeminiConfig::from_env());
            let result = use_case.execute(GenerateDesignParams { prompt }).await;
            CommandOutcome::from_result(result.map(design::dto::GeneratedDesignResponse::from))
        }
        storage_command => {
            let pool = init_database().await?;
            run_storage_command(StorageContainer::new(pool), storage_command).await
        }
    }
}

async fn run_storage_command(
    container: StorageContainer,
    command: Command,
) -> anyhow::Result<CommandOutcome> {
    match command {
        Command::Register {
            name,
            gender,
            dob,
            lat,
            long,
        } => {
            let result = container
                .register_use_case
                .execute(RegisterUserParams {
                    display_name: name,
                    gender,
                    date_of_birth: dob,
                    latitude: lat,
                    longitude: long,
                })
                .await;
            CommandOutcome::from_result(result.map(UserProfileResponse::from))
        }
        Command::React { user, dish, action } => {
            let result = container
                .react_use_case
                .execute(ReactToDishParams {
                    user_id: UserId::new(user),
                    dish_name: dish,
                    action,
                })
                .await;
            CommandOutcome::from_result(result.map(DishReactionResponse::from))
        }
        Command::Favorite { user, dish } => {
            let result = container
                .add_favorite_use_case
                .execute(AddFavoriteParams {
                    user_id: UserId::new(user),
                    dish_name: dish.clone(),
                })
                .await;
            CommandOutcome::from_result(result.map(|outcome| AddFavoriteResponse {
                dish_name: dish.trim().to_string(),
                outcome: outcome.into(),
            }))
        }
        Command::Activity {
            user,
            kind: ActivityKind::Favorites,
        } => {
            let result = container
                .get_all_favorites_use_case
                .execute(GetAllFavoritesParams {
                    user_id: UserId::new(user),
                })
                .await;
            CommandOutcome::from_result(result.map(|favorites| {
                favorites
                    .into_iter()
                    .map(FavoriteResponse::from)
                    .collect::<Vec<_>>()
            }))
        }
        Command::Activity {
            user,
            kind: ActivityKind::Likes,
        } => {
            let result = container
                .get_all_dish_actions_use_case
                .execute(GetAllDishActionsParams {
                    user_id: UserId::new(user),
                })
                .await;
            CommandOutcome::from_result(result.map(|actions| {
                actions
                    .into_iter()
                    .map(DishActionResponse::from)
                    .collect::<Vec<_>>()
            }))
        }
        Command::Recommend { .. } | Command::Design { .. } => {
            anyhow::bail!("command does not use storage")
        }
    }
}
