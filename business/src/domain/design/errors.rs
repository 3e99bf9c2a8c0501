#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    #[error("design.prompt_empty")]
    PromptEmpty,
    #[error("design.generation_failed")]
    GenerationFailed,
}
