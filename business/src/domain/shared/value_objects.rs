use serde::{Deserialize, Serialize};
use uuid::Uuid;

const USER_ID_PREFIX: &str = "USR";
const USER_ID_RANDOM_LEN: usize = 8;

/// Public identifier of a user profile, e.g. `USR1A2B3C4D`.
/// Every action and favorite record is keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh candidate identifier: the `USR` prefix followed by
    /// eight upper-case hex characters. Uniqueness is checked by the caller.
    pub fn generate() -> Self {
        let random = Uuid::new_v4().simple().to_string();
        Self(format!(
            "{}{}",
            USER_ID_PREFIX,
            random[..USER_ID_RANDOM_LEN].to_uppercase()
        ))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_id_from_str() {
        let user_id = UserId::new("USR0000ABCD");
        assert_eq!(user_id.as_str(), "USR0000ABCD");
    }

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("USR12345678");
        assert_eq!(format!("{}", user_id), "USR12345678");
    }

    #[test]
    fn should_generate_prefixed_upper_hex_id() {
        let user_id = UserId::generate();
        let id = user_id.as_str();

        assert_eq!(id.len(), 11);
        assert!(id.starts_with("USR"));
        assert!(
            id[3..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        );
    }

    #[test]
    fn should_generate_different_ids() {
        assert_ne!(UserId::generate(), UserId::generate());
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        assert_eq!(UserId::new("USRAAAA0000"), UserId::from("USRAAAA0000"));
        assert_ne!(UserId::new("USRAAAA0000"), UserId::new("USRBBBB1111"));
    }
}
