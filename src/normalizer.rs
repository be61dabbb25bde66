//! # Ingredient Normalizer
//!
//! Turns one free-text recipe ingredient line into the display name used on the
//! shopping list.
//!
//! ## Pipeline
//!
//! 1. Strip the leading quantity ("2 1/2", "3-4", "½")
//! 2. Drop parenthetical asides ("(about 2 cups)")
//! 3. Drop leading unit and size words ("cups", "lb", "large") while more than one word remains
//! 4. Drop a leading "of "
//! 5. Cut trailing qualifiers ("to taste", ", for garnish", "optional")
//! 6. Trim trailing punctuation
//!
//! If nothing survives, the trimmed input is returned so an ingredient is never
//! silently erased from the list.
//!
//! ## Usage
//!
//! ```rust
//! use shopping_list::normalizer::normalize_ingredient;
//!
//! assert_eq!(normalize_ingredient("2 cups all-purpose flour"), "all-purpose flour");
//! assert_eq!(normalize_ingredient("3 large eggs"), "eggs");
//! assert_eq!(normalize_ingredient("cup"), "cup");
//! ```

use crate::ingredient_patterns::{
    is_unit_word, OF_PREFIX_REGEX, PARENTHETICAL_REGEX, QUANTITY_REGEX,
    TRAILING_PUNCTUATION_REGEX, TRAILING_QUALIFIER_REGEX,
};
use log::trace;

/// Normalize a raw ingredient line into a shopping-list name
///
/// Pure and idempotent. Never returns an empty string for input that has any
/// non-whitespace content.
pub fn normalize_ingredient(raw: &str) -> String {
    let original = raw.trim();

    let without_quantity = QUANTITY_REGEX.replace(original, "");
    let without_quantity = without_quantity.trim();
    trace!("Quantity stripped: '{}' -> '{}'", original, without_quantity);

    let without_asides = PARENTHETICAL_REGEX.replace_all(without_quantity, "");
    let without_asides = without_asides.trim();

    let name = strip_leading_units(without_asides);
    trace!("Unit words stripped: '{}' -> '{}'", without_asides, name);

    let name = OF_PREFIX_REGEX.replace(&name, "");
    let name = TRAILING_QUALIFIER_REGEX.replace(&name, "");
    let name = TRAILING_PUNCTUATION_REGEX.replace(name.trim(), "");

    if name.is_empty() {
        trace!("Normalization emptied '{}', keeping original", original);
        return original.to_string();
    }

    trace!("Normalized ingredient: '{}' -> '{}'", original, name);
    name.into_owned()
}

/// Drop leading unit words, always keeping at least one word
fn strip_leading_units(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut start = 0;

    while words.len() - start > 1 && is_unit_word(&unit_key(words[start])) {
        start += 1;
    }

    words[start..].join(" ")
}

/// Lowercase a token and remove periods and commas ("Tbsp." -> "tbsp")
fn unit_key(word: &str) -> String {
    word.to_lowercase().replace(['.', ','], "")
}
