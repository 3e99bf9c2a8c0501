/// Dish names are stored in a bounded column.
pub const MAX_DISH_NAME_LEN: usize = 100;

/// Why a raw dish name was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum DishNameIssue {
    Empty,
    TooLong,
}

/// Trims a dish name and checks it fits the storage bounds.
pub fn normalize_dish_name(raw: &str) -> Result<String, DishNameIssue> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DishNameIssue::Empty);
    }
    if name.chars().count() > MAX_DISH_NAME_LEN {
        return Err(DishNameIssue::TooLong);
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_surrounding_whitespace() {
        assert_eq!(
            normalize_dish_name("  Butter Chicken ").unwrap(),
            "Butter Chicken"
        );
    }

    #[test]
    fn should_reject_blank_name() {
        assert_eq!(normalize_dish_name("   "), Err(DishNameIssue::Empty));
    }

    #[test]
    fn should_reject_name_over_limit() {
        let name = "a".repeat(MAX_DISH_NAME_LEN + 1);
        assert_eq!(normalize_dish_name(&name), Err(DishNameIssue::TooLong));
    }

    #[test]
    fn should_count_characters_not_bytes() {
        let name = "é".repeat(MAX_DISH_NAME_LEN);
        assert!(normalize_dish_name(&name).is_ok());
    }
}
