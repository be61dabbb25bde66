//! # Ingredient Patterns Module
//!
//! This module contains the regex patterns and word lists used to reduce a raw
//! ingredient line to the name of the thing you actually buy.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

// Leading quantity: digits, decimal points, fractions, ranges and vulgar-fraction glyphs
pub const QUANTITY_PATTERN: &str = r"^[0-9¼½¾⅓⅔⅛⅜⅝⅞/.\s\-]+";

// Parenthetical asides anywhere in the line, non-greedy
pub const PARENTHETICAL_PATTERN: &str = r"\(.*?\)";

pub const OF_PREFIX_PATTERN: &str = r"(?i)^of\s+";

// Trailing qualifier clause, swallowing everything up to the end of the line
pub const TRAILING_QUALIFIER_PATTERN: &str = r"(?i)[,;]?\s*(?:to taste|for serving|for garnish|as needed|optional|divided|plus more|or more|or less|about|approximately|roughly|freshly).*$";

pub const TRAILING_PUNCTUATION_PATTERN: &str = r"[,.\s]+$";

// Separators used when splitting a name into candidate significant words
pub const WORD_SEPARATOR_PATTERN: &str = r"[\s,\-]+";

/// Measurement and size words that may precede the food name
pub const UNIT_WORDS: &[&str] = &[
    // volume
    "cup", "cups", "c", "tablespoon", "tablespoons", "tbsp", "tbs", "tb",
    "teaspoon", "teaspoons", "tsp", "ml", "milliliter", "milliliters",
    "liter", "liters", "l", "fl", "oz", "fluid",
    // weight
    "pound", "pounds", "lb", "lbs", "ounce", "ounces", "g", "gram", "grams",
    "kg", "kilogram", "kilograms",
    // count / size
    "large", "small", "medium", "whole", "piece", "pieces", "bunch", "bunches",
    "clove", "cloves", "can", "cans", "jar", "jars", "package", "packages", "pkg",
    "bag", "bags", "box", "boxes", "stick", "sticks", "head", "heads", "sprig", "sprigs",
    "slice", "slices", "pinch", "dash", "handful",
];

/// Preparation and size adjectives that never identify the food itself
pub const DESCRIPTOR_WORDS: &[&str] = &[
    "shredded", "chopped", "diced", "minced", "fresh", "dried", "sliced", "peeled",
    "cooked", "frozen", "canned", "ground", "whole", "large", "small", "medium",
];

lazy_static! {
    pub static ref QUANTITY_REGEX: Regex =
        Regex::new(QUANTITY_PATTERN).expect("Quantity pattern should be valid");
    pub static ref PARENTHETICAL_REGEX: Regex =
        Regex::new(PARENTHETICAL_PATTERN).expect("Parenthetical pattern should be valid");
    pub static ref OF_PREFIX_REGEX: Regex =
        Regex::new(OF_PREFIX_PATTERN).expect("Prefix pattern should be valid");
    pub static ref TRAILING_QUALIFIER_REGEX: Regex = Regex::new(TRAILING_QUALIFIER_PATTERN)
        .expect("Trailing qualifier pattern should be valid");
    pub static ref TRAILING_PUNCTUATION_REGEX: Regex = Regex::new(TRAILING_PUNCTUATION_PATTERN)
        .expect("Trailing punctuation pattern should be valid");
    pub static ref WORD_SEPARATOR_REGEX: Regex =
        Regex::new(WORD_SEPARATOR_PATTERN).expect("Word separator pattern should be valid");
    pub static ref UNITS: HashSet<&'static str> = UNIT_WORDS.iter().copied().collect();
    pub static ref DESCRIPTORS: HashSet<&'static str> = DESCRIPTOR_WORDS.iter().copied().collect();
}

/// Check whether a (lowercased, punctuation-free) token is a unit or size word
pub fn is_unit_word(word: &str) -> bool {
    UNITS.contains(word)
}

/// Check whether a lowercased token is a preparation/size descriptor
pub fn is_descriptor_word(word: &str) -> bool {
    DESCRIPTORS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(!QUANTITY_REGEX.as_str().is_empty());
        assert!(!PARENTHETICAL_REGEX.as_str().is_empty());
        assert!(!OF_PREFIX_REGEX.as_str().is_empty());
        assert!(!TRAILING_QUALIFIER_REGEX.as_str().is_empty());
        assert!(!TRAILING_PUNCTUATION_REGEX.as_str().is_empty());
        assert!(!WORD_SEPARATOR_REGEX.as_str().is_empty());
    }

    #[test]
    fn test_quantity_regex_handles_compound_and_ranges() {
        assert_eq!(QUANTITY_REGEX.replace("2 1/2 cups rice", ""), "cups rice");
        assert_eq!(QUANTITY_REGEX.replace("3-4 carrots", ""), "carrots");
        assert_eq!(QUANTITY_REGEX.replace("½ onion", ""), "onion");
        assert_eq!(QUANTITY_REGEX.replace("1.5 kg potatoes", ""), "kg potatoes");
        assert_eq!(QUANTITY_REGEX.replace("rice", ""), "rice");
    }

    #[test]
    fn test_trailing_qualifier_regex() {
        assert_eq!(
            TRAILING_QUALIFIER_REGEX.replace("salt and pepper to taste", ""),
            "salt and pepper"
        );
        assert_eq!(
            TRAILING_QUALIFIER_REGEX.replace("parsley, for garnish", ""),
            "parsley"
        );
        assert_eq!(
            TRAILING_QUALIFIER_REGEX.replace("butter; divided into halves", ""),
            "butter"
        );
    }

    #[test]
    fn test_vocabularies() {
        assert!(is_unit_word("cups"));
        assert!(is_unit_word("large"));
        assert!(!is_unit_word("flour"));
        assert!(is_descriptor_word("shredded"));
        assert!(!is_descriptor_word("cheese"));
    }
}
