use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::NonBinary => write!(f, "non_binary"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "non_binary" | "non-binary" => Ok(Gender::NonBinary),
            _ => Err(format!("Invalid gender: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_hyphenated_non_binary() {
        assert_eq!("non-binary".parse::<Gender>(), Ok(Gender::NonBinary));
        assert_eq!("non_binary".parse::<Gender>(), Ok(Gender::NonBinary));
    }

    #[test]
    fn should_reject_unknown_gender() {
        assert!("other".parse::<Gender>().is_err());
    }
}
