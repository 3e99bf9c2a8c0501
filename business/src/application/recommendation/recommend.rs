use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recommendation::enrichment::enrich_suggestions;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::DishSuggestions;
use crate::domain::recommendation::parser::parse_suggestions;
use crate::domain::recommendation::services::{DishRecommenderService, ImageLookupService};
use crate::domain::recommendation::use_cases::recommend::{
    RecommendDishesParams, RecommendDishesUseCase,
};

pub struct RecommendDishesUseCaseImpl {
    pub recommender: Arc<dyn DishRecommenderService>,
    pub image_lookup: Arc<dyn ImageLookupService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecommendDishesUseCase for RecommendDishesUseCaseImpl {
    async fn execute(
        &self,
        params: RecommendDishesParams,
    ) -> Result<DishSuggestions, RecommendationError> {
        let query = params.query.trim();
        if query.is_empty() {
            return Err(RecommendationError::QueryEmpty);
        }

        self.logger
            .info(&format!("Recommending dishes for: {}", query));

        let text = self.recommender.recommend(query).await?;
        let parsed = parse_suggestions(&text);

        for entry in &parsed.skipped {
            self.logger.warn(&format!(
                "Entry not in expected format ({}): {}",
                entry.reason, entry.line
            ));
        }

        let suggestions =
            enrich_suggestions(parsed.suggestions, self.image_lookup.as_ref(), self.logger.as_ref())
                .await;

        self.logger
            .info(&format!("Recommended {} dishes", suggestions.len()));

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::errors::ImageLookupError;
    use crate::domain::recommendation::model::DishImage;
    use mockall::mock;

    mock! {
        pub Recommender {}

        #[async_trait]
        impl DishRecommenderService for Recommender {
            async fn recommend(&self, query: &str) -> Result<String, RecommendationError>;
        }
    }

    mock! {
        pub ImageLookup {}

        #[async_trait]
        impl ImageLookupService for ImageLookup {
            async fn lookup(&self, query: &str) -> Result<Option<String>, ImageLookupError>;
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

    const RAITA_LIST: &str = "1. Butter Chicken Raita - Rich, creamy butter chicken blended with yogurt.
    2. Minty Cucumber Raita - Refreshing combination of mint and cucumber.
    3. Spicy Tomato Raita - Tangy tomato raita with a hint of cumin.";

    #[tokio::test]
    async fn should_parse_and_enrich_recommendations() {
        let mut recommender = MockRecommender::new();
        recommender
            .expect_recommend()
            .withf(|q| q == "raita")
            .returning(|_| Ok(RAITA_LIST.to_string()));
        let mut lookup = MockImageLookup::new();
        lookup
            .expect_lookup()
            .times(3)
            .returning(|q| Ok(Some(format!("https://img.example/{}.jpg", q.len()))));

        let use_case = RecommendDishesUseCaseImpl {
            recommender: Arc::new(recommender),
            image_lookup: Arc::new(lookup),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecommendDishesParams {
                query: "  raita ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[&3].name, "Spicy Tomato Raita");
        assert!(result.values().all(|s| matches!(s.image, DishImage::Found(_))));
    }

    #[tokio::test]
    async fn should_warn_for_each_skipped_line() {
        let mut recommender = MockRecommender::new();
        recommender.expect_recommend().returning(|_| {
            Ok("Here are some ideas:\n1. Soup - Hot liquid food".to_string())
        });
        let mut lookup = MockImageLookup::new();
        lookup.expect_lookup().returning(|_| Ok(None));
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger
            .expect_warn()
            .withf(|m| m.contains("Here are some ideas:"))
            .times(1)
            .returning(|_| ());

        let use_case = RecommendDishesUseCaseImpl {
            recommender: Arc::new(recommender),
            image_lookup: Arc::new(lookup),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(RecommendDishesParams {
                query: "soup".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[&1].image, DishImage::Missing);
    }

    #[tokio::test]
    async fn should_reject_empty_query() {
        let use_case = RecommendDishesUseCaseImpl {
            recommender: Arc::new(MockRecommender::new()),
            image_lookup: Arc::new(MockImageLookup::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecommendDishesParams {
                query: "   ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), RecommendationError::QueryEmpty));
    }

    #[tokio::test]
    async fn should_fail_when_model_fails() {
        let mut recommender = MockRecommender::new();
        recommender
            .expect_recommend()
            .returning(|_| Err(RecommendationError::GenerationFailed));

        let use_case = RecommendDishesUseCaseImpl {
            recommender: Arc::new(recommender),
            image_lookup: Arc::new(MockImageLookup::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecommendDishesParams {
                query: "burgers".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            RecommendationError::GenerationFailed
        ));
    }

    #[tokio::test]
    async fn should_return_empty_when_model_ignores_format() {
        let mut recommender = MockRecommender::new();
        recommender
            .expect_recommend()
            .returning(|_| Ok("1 Soup Hot liquid".to_string()));

        let use_case = RecommendDishesUseCaseImpl {
            recommender: Arc::new(recommender),
            image_lookup: Arc::new(MockImageLookup::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecommendDishesParams {
                query: "soup".to_string(),
            })
            .await
            .unwrap();

        assert!(result.is_empty());
    }
}
