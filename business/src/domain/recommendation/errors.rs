#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("recommendation.query_empty")]
    QueryEmpty,
    #[error("recommendation.generation_failed")]
    GenerationFailed,
}

#[derive(Debug, thiserror::Error)]
pub enum ImageLookupError {
    #[error("image_lookup.unavailable")]
    Unavailable,
}
