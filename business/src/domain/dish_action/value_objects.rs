use serde::{Deserialize, Serialize};

/// How a user feels about a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Like,
    Dislike,
    Love,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Like => write!(f, "like"),
            ActionKind::Dislike => write!(f, "dislike"),
            ActionKind::Love => write!(f, "love"),
        }
    }
}

impl std::str::FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(ActionKind::Like),
            "dislike" => Ok(ActionKind::Dislike),
            "love" => Ok(ActionKind::Love),
            _ => Err(format!("Invalid action kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_display_form() {
        for kind in [ActionKind::Like, ActionKind::Dislike, ActionKind::Love] {
            assert_eq!(kind.to_string().parse::<ActionKind>(), Ok(kind));
        }
    }

    #[test]
    fn should_reject_unknown_action() {
        assert!("meh".parse::<ActionKind>().is_err());
        assert!("Like".parse::<ActionKind>().is_err());
    }
}
