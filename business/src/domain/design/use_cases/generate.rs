use async_trait::async_trait;

use crate::domain::design::errors::DesignError;
use crate::domain::design::model::GeneratedDesign;

pub struct GenerateDesignParams {
    pub prompt: String,
}

#[async_trait]
pub trait GenerateDesignUseCase: Send + Sync {
    async fn execute(&self, params: GenerateDesignParams) -> Result<GeneratedDesign, DesignError>;
}
