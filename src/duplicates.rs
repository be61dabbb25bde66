//! # Duplicate Detection
//!
//! Flags shopping entries that probably name the same purchase under different
//! wording ("cheddar cheese" from one recipe, "grated cheese" from another).
//!
//! Each entry is keyed on its last significant word: at least four characters,
//! not a unit word and not a preparation descriptor. Entries sharing a key form
//! a group. The heuristic overmatches on purpose; the user dismisses false
//! positives.

use crate::ingredient_patterns::{is_descriptor_word, is_unit_word, WORD_SEPARATOR_REGEX};
use crate::shopping_types::{DuplicatePartner, ShoppingEntry};
use log::{debug, trace};
use std::collections::HashMap;

const MIN_SIGNIFICANT_LEN: usize = 4;

/// Entry id -> the other entries in its duplicate group
pub type DuplicateMap = HashMap<String, Vec<DuplicatePartner>>;

/// Words of a name that could identify the food itself, in order
pub fn significant_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_SEPARATOR_REGEX
        .split(&lower)
        .filter(|word| word.chars().count() >= MIN_SIGNIFICANT_LEN)
        .filter(|word| !is_unit_word(word) && !is_descriptor_word(word))
        .map(|word| word.to_string())
        .collect()
}

/// The grouping key of a name: its last significant word
pub fn duplicate_key(text: &str) -> Option<String> {
    significant_words(text).pop()
}

/// Find entries that likely refer to the same item
///
/// Every entry in a group of two or more maps to the other members of the
/// group, in list order. Entries without a significant word are never grouped.
pub fn find_duplicates(entries: &[ShoppingEntry]) -> DuplicateMap {
    let mut group_order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let Some(key) = duplicate_key(&entry.text) else {
            trace!("No significant word in '{}'", entry.text);
            continue;
        };
        groups
            .entry(key.clone())
            .or_insert_with(|| {
                group_order.push(key);
                Vec::new()
            })
            .push(index);
    }

    let mut duplicates = DuplicateMap::new();
    for key in &group_order {
        let members = &groups[key];
        if members.len() < 2 {
            continue;
        }
        debug!("Duplicate group '{}' with {} entries", key, members.len());

        for &index in members {
            let partners = members
                .iter()
                .filter(|&&other| other != index)
                .map(|&other| DuplicatePartner {
                    text: entries[other].text.clone(),
                    recipe_name: entries[other].recipe_name.clone(),
                })
                .collect();
            duplicates.insert(entries[index].id.clone(), partners);
        }
    }

    debug!(
        "Found {} entries with possible duplicates among {}",
        duplicates.len(),
        entries.len()
    );
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, text: &str, recipe: &str) -> ShoppingEntry {
        ShoppingEntry::from_recipe(id.to_string(), text.to_string(), "Mon", recipe)
    }

    #[test]
    fn test_significant_words() {
        assert_eq!(
            significant_words("Shredded cheddar cheese"),
            vec!["cheddar".to_string(), "cheese".to_string()]
        );
        assert_eq!(significant_words("all-purpose flour"), vec!["purpose", "flour"]);
        assert!(significant_words("large egg").is_empty());
        assert!(significant_words("fresh fig, chopped").is_empty());
    }

    #[test]
    fn test_duplicate_key_is_last_word() {
        assert_eq!(duplicate_key("cheddar cheese").as_deref(), Some("cheese"));
        assert_eq!(duplicate_key("shredded cheddar").as_deref(), Some("cheddar"));
        assert_eq!(duplicate_key("egg"), None);
    }

    #[test]
    fn test_group_partners_exclude_self() {
        let entries = vec![
            entry("a", "cheddar cheese", "Mac"),
            entry("b", "rice", "Bowl"),
            entry("c", "grated cheese", "Pasta"),
            entry("d", "goat cheese", "Salad"),
        ];

        let duplicates = find_duplicates(&entries);

        assert_eq!(duplicates.len(), 3);
        assert_eq!(
            duplicates["a"],
            vec![
                DuplicatePartner {
                    text: "grated cheese".to_string(),
                    recipe_name: "Pasta".to_string()
                },
                DuplicatePartner {
                    text: "goat cheese".to_string(),
                    recipe_name: "Salad".to_string()
                },
            ]
        );
        assert_eq!(duplicates["d"].len(), 2);
        assert_eq!(duplicates["d"][0].text, "cheddar cheese");
        assert!(!duplicates.contains_key("b"));
    }

    #[test]
    fn test_empty_input() {
        assert!(find_duplicates(&[]).is_empty());
    }
}
