use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::design::errors::DesignError;
use crate::domain::design::extractor::extract_design;
use crate::domain::design::model::GeneratedDesign;
use crate::domain::design::services::DesignGeneratorService;
use crate::domain::design::use_cases::generate::{GenerateDesignParams, GenerateDesignUseCase};
use crate::domain::logger::Logger;

pub struct GenerateDesignUseCaseImpl {
    pub generator: Arc<dyn DesignGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateDesignUseCase for GenerateDesignUseCaseImpl {
    async fn execute(&self, params: GenerateDesignParams) -> Result<GeneratedDesign, DesignError> {
        let prompt = params.prompt.trim();
        if prompt.is_empty() {
            return Err(DesignError::PromptEmpty);
        }

        self.logger.info("Generating system design");

        let text = self.generator.generate(prompt).await?;
        let design = extract_design(&text);

        match &design {
            Some(d) => self.logger.info(&format!(
                "Design extracted: {} nodes, {} edges",
                d.nodes.len(),
                d.edges.len()
            )),
            None => self
                .logger
                .warn("Model output did not contain a design graph"),
        }

        Ok(GeneratedDesign { text, design })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Generator {}

        #[async_trait]
        impl DesignGeneratorService for Generator {
            async fn generate(&self, prompt: &str) -> Result<String, DesignError>;
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
    async fn should_return_text_and_extracted_design() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .withf(|p| p == "chat app")
            .returning(|_| {
                Ok(r#"{"nodes": {"api": {"name": "API"}}, "connections": []}"#.to_string())
            });

        let use_case = GenerateDesignUseCaseImpl {
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateDesignParams {
                prompt: " chat app ".to_string(),
            })
            .await
            .unwrap();

        assert!(result.text.contains("API"));
        assert_eq!(result.design.unwrap().nodes["api"].name, "API");
    }

    #[tokio::test]
    async fn should_keep_text_when_no_design_found() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Ok("Sorry, no diagram today.".to_string()));

        let use_case = GenerateDesignUseCaseImpl {
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateDesignParams {
                prompt: "chat app".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.text, "Sorry, no diagram today.");
        assert!(result.design.is_none());
    }

    #[tokio::test]
    async fn should_reject_empty_prompt() {
        let use_case = GenerateDesignUseCaseImpl {
            generator: Arc::new(MockGenerator::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateDesignParams {
                prompt: "".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), DesignError::PromptEmpty));
    }

    #[tokio::test]
    async fn should_propagate_generation_failure() {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(DesignError::GenerationFailed));

        let use_case = GenerateDesignUseCaseImpl {
            generator: Arc::new(generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateDesignParams {
                prompt: "chat app".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), DesignError::GenerationFailed));
    }
}
