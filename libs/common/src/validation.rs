//! Input validation utilities
//!
//! All validation happens before any network call; a failure blocks the
//! submission with a descriptive message and no request is made.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::BoxDraft;

/// Validate a registration username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".to_string());
    }

    if username.len() < 3 || username.len() > 20 {
        return Err("Username must be between 3 and 20 characters long".to_string());
    }

    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = USERNAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("Failed to compile username regex"));

    if !regex.is_match(username) {
        return Err("Username can only contain letters, numbers, and underscores".to_string());
    }

    Ok(())
}

/// Validate a registration password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }

    Ok(())
}

/// Validate a box draft before it is created or updated.
///
/// Required: a name, a positive price, a non-negative integer stock, at
/// least one item variant, and for every variant a non-empty name,
/// description and image reference plus a positive quantity.
pub fn validate_box_draft(draft: &BoxDraft) -> Result<(), String> {
    if draft.name.trim().is_empty() {
        return Err("Box name is required".to_string());
    }

    if !(draft.price > 0.0) {
        return Err("Box price must be a positive number".to_string());
    }

    if draft.stock < 0 {
        return Err("Box stock must not be negative".to_string());
    }

    if draft.items.is_empty() {
        return Err("A box needs at least one item variant".to_string());
    }

    for (index, item) in draft.items.iter().enumerate() {
        let position = index + 1;
        if item.name.trim().is_empty() {
            return Err(format!("Item variant {position} is missing a name"));
        }
        if item.description.trim().is_empty() {
            return Err(format!("Item variant {position} is missing a description"));
        }
        if item.image_url.trim().is_empty() {
            return Err(format!("Item variant {position} is missing an image"));
        }
        if item.quantity <= 0 {
            return Err(format!("Item variant {position} needs a positive quantity"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemDraft;

    fn draft() -> BoxDraft {
        BoxDraft {
            name: "Pass 31.0".to_string(),
            price: 25.0,
            image_url: "/goods/pass31.jpg".to_string(),
            stock: 100,
            description: "the thirty-first pass".to_string(),
            items: vec![ItemDraft {
                name: "common card".to_string(),
                description: "nine in ten".to_string(),
                image_url: "/items/common.jpg".to_string(),
                quantity: 9,
            }],
        }
    }

    #[test]
    fn accepts_valid_username() {
        assert!(validate_username("alice_01").is_ok());
    }

    #[test]
    fn rejects_username_of_length_two_with_length_message() {
        let err = validate_username("ab").unwrap_err();
        assert!(err.contains("between 3 and 20"));
    }

    #[test]
    fn rejects_username_with_invalid_characters() {
        assert!(validate_username("al ice").is_err());
    }

    #[test]
    fn rejects_short_password_with_length_message() {
        let err = validate_password("12345").unwrap_err();
        assert!(err.contains("at least 6"));
        assert!(validate_password("secret1").is_ok());
    }

    #[test]
    fn rejects_empty_password() {
        assert_eq!(validate_password("").unwrap_err(), "Password is required");
    }

    #[test]
    fn accepts_valid_box_draft() {
        assert!(validate_box_draft(&draft()).is_ok());
    }

    #[test]
    fn rejects_draft_without_name() {
        let mut d = draft();
        d.name = "  ".to_string();
        assert_eq!(validate_box_draft(&d).unwrap_err(), "Box name is required");
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut d = draft();
        d.price = 0.0;
        assert!(validate_box_draft(&d).is_err());
    }

    #[test]
    fn rejects_negative_stock() {
        let mut d = draft();
        d.stock = -1;
        assert!(validate_box_draft(&d).is_err());
    }

    #[test]
    fn rejects_draft_without_item_variants() {
        let mut d = draft();
        d.items.clear();
        assert!(validate_box_draft(&d).unwrap_err().contains("at least one item"));
    }

    #[test]
    fn rejects_variant_with_zero_quantity() {
        let mut d = draft();
        d.items[0].quantity = 0;
        assert!(validate_box_draft(&d).unwrap_err().contains("positive quantity"));
    }
}
