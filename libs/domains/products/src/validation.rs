//! Field rules shared by product and category payloads.
//!
//! Each rule doubles as a `#[validate(custom(function = ...))]` hook.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use crate::models::Category;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 20;
pub const DESCRIPTION_MAX_LEN: usize = 100;
pub const PRICE_MAX: f64 = 100_000.0;
/// Every price must end in `.99`.
pub const REQUIRED_CENTS: i64 = 99;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("name pattern is a valid regex"));

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// 2 to 20 characters from `[A-Za-z0-9_-]`.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) || !NAME_PATTERN.is_match(name) {
        let mut err = invalid(
            "invalid_name",
            "name must be 2-20 characters of letters, digits, '_' or '-'",
        );
        err.add_param(Cow::Borrowed("value"), &name);
        return Err(err);
    }
    Ok(())
}

/// At most 100 characters; empty is allowed.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(invalid(
            "invalid_description",
            "description must be at most 100 characters",
        ));
    }
    Ok(())
}

/// Strictly between 0 and 100000, with cents that round to 99.
pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    // NaN fails both comparisons.
    let in_range = price > 0.0 && price < PRICE_MAX;
    let cents = (price.fract() * 100.0).round() as i64;

    if !in_range || cents != REQUIRED_CENTS {
        let mut err = invalid(
            "invalid_price",
            "price must be between 0 and 100000 and end in .99",
        );
        err.add_param(Cow::Borrowed("value"), &price);
        return Err(err);
    }
    Ok(())
}

/// Applies the name and description rules to an embedded category.
pub fn validate_category(category: &Category) -> Result<(), ValidationError> {
    category.validate().map_err(|errors| {
        ValidationError::new("invalid_category").with_message(Cow::Owned(errors.to_string()))
    })
}
