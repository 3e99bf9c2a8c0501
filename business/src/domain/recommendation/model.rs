use std::collections::BTreeMap;

/// Image attached to a suggested dish.
#[derive(Debug, Clone, PartialEq)]
pub enum DishImage {
    /// Freshly parsed; no lookup attempted yet.
    Placeholder,
    Found(String),
    /// Lookup returned nothing or failed.
    Missing,
}

impl DishImage {
    pub fn url(&self) -> Option<&str> {
        match self {
            DishImage::Found(url) => Some(url),
            _ => None,
        }
    }
}

/// A dish proposed by the language model.
#[derive(Debug, Clone, PartialEq)]
pub struct DishSuggestion {
    /// Position the entry claimed in the model output (1-based, may have gaps).
    pub ordinal: u32,
    pub name: String,
    pub description: String,
    pub image: DishImage,
}

/// Suggestions keyed by their claimed ordinal.
pub type DishSuggestions = BTreeMap<u32, DishSuggestion>;
