use super::model::{DishImage, DishSuggestion, DishSuggestions};

const ORDINAL_SEPARATOR: &str = ". ";
const DESCRIPTION_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, PartialEq)]
pub enum MalformedReason {
    MissingOrdinalSeparator,
    MissingDescriptionSeparator,
    InvalidOrdinal,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::MissingOrdinalSeparator => write!(f, "missing '. ' after number"),
            MalformedReason::MissingDescriptionSeparator => {
                write!(f, "missing ' - ' between name and description")
            }
            MalformedReason::InvalidOrdinal => write!(f, "entry number is not a positive integer"),
        }
    }
}

/// A line that could not be read as `N. Name - Description`.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedEntry {
    pub line: String,
    pub reason: MalformedReason,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedSuggestions {
    pub suggestions: DishSuggestions,
    pub skipped: Vec<MalformedEntry>,
}

/// Parses a numbered list of the form `N. Name - Description`, one entry per
/// line. Separators are matched on the raw line; only the pieces are trimmed,
/// so `1. Soup - ` is an entry with an empty description. Lines that do not
/// match are reported in `skipped` and never stop the parse. A repeated
/// number overwrites the earlier entry.
pub fn parse_suggestions(text: &str) -> ParsedSuggestions {
    let mut parsed = ParsedSuggestions::default();

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        match parse_line(line) {
            Ok(suggestion) => {
                parsed.suggestions.insert(suggestion.ordinal, suggestion);
            }
            Err(reason) => parsed.skipped.push(MalformedEntry {
                line: line.trim().to_string(),
                reason,
            }),
        }
    }

    parsed
}

fn parse_line(line: &str) -> Result<DishSuggestion, MalformedReason> {
    let (ordinal, rest) = line
        .split_once(ORDINAL_SEPARATOR)
        .ok_or(MalformedReason::MissingOrdinalSeparator)?;
    let (name, description) = rest
        .split_once(DESCRIPTION_SEPARATOR)
        .ok_or(MalformedReason::MissingDescriptionSeparator)?;
    let ordinal = ordinal
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or(MalformedReason::InvalidOrdinal)?;

    Ok(DishSuggestion {
        ordinal,
        name: name.trim().to_string(),
        description: description.trim().to_string(),
        image: DishImage::Placeholder,
    })
}
