use crate::domain::logger::Logger;

use super::model::{DishImage, DishSuggestions};
use super::services::ImageLookupService;

/// Looks up an image for every suggestion, one at a time.
///
/// A lookup that fails or finds nothing marks that entry `Missing`; the
/// remaining entries are still processed.
pub async fn enrich_suggestions(
    mut suggestions: DishSuggestions,
    image_lookup: &dyn ImageLookupService,
    logger: &dyn Logger,
) -> DishSuggestions {
    for suggestion in suggestions.values_mut() {
        suggestion.image = match image_lookup.lookup(&suggestion.name).await {
            Ok(Some(url)) => DishImage::Found(url),
            Ok(None) => {
                logger.debug(&format!("No image found for '{}'", suggestion.name));
                DishImage::Missing
            }
            Err(e) => {
                logger.warn(&format!(
                    "Image lookup failed for '{}': {}",
                    suggestion.name, e
                ));
                DishImage::Missing
            }
        };
    }

    suggestions
}
