use std::collections::BTreeMap;

use serde::Serialize;

use business::domain::recommendation::model::{DishSuggestion, DishSuggestions};

#[derive(Debug, Clone, Serialize)]
pub struct DishSuggestionResponse {
    pub name: String,
    pub description: String,
    /// Null when no image could be found
    pub image: Option<String>,
}

impl From<DishSuggestion> for DishSuggestionResponse {
    fn from(s: DishSuggestion) -> Self {
        Self {
            image: s.image.url().map(str::to_string),
            name: s.name,
            description: s.description,
        }
    }
}

/// Suggestions keyed by the ordinal the model gave them.
pub fn to_response(suggestions: DishSuggestions) -> BTreeMap<u32, DishSuggestionResponse> {
    suggestions
        .into_iter()
        .map(|(ordinal, suggestion)| (ordinal, suggestion.into()))
        .collect()
}
