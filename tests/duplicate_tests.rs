#[cfg(test)]
mod tests {
    use shopping_list::duplicates::{duplicate_key, find_duplicates, significant_words};
    use shopping_list::normalizer::normalize_ingredient;
    use shopping_list::shopping_types::ShoppingEntry;

    fn entry(id: &str, raw: &str, recipe: &str) -> ShoppingEntry {
        ShoppingEntry::from_recipe(id.to_string(), normalize_ingredient(raw), "Mon", recipe)
    }

    #[test]
    fn test_last_significant_word_logic() {
        // "cheddar cheese" keys on "cheese", "shredded cheddar" keys on "cheddar"
        assert_eq!(duplicate_key("cheddar cheese").as_deref(), Some("cheese"));
        assert_eq!(duplicate_key("shredded cheddar").as_deref(), Some("cheddar"));

        let entries = vec![
            entry("a", "cheddar cheese", "Mac and cheese"),
            entry("b", "1 cup shredded cheddar", "Nachos"),
        ];
        assert!(find_duplicates(&entries).is_empty());
    }

    #[test]
    fn test_shared_base_noun_is_flagged() {
        let entries = vec![
            entry("a", "8 oz cheddar cheese", "Mac and cheese"),
            entry("b", "1 cup grated cheese", "Lasagna"),
        ];

        let duplicates = find_duplicates(&entries);

        assert_eq!(duplicates.len(), 2);
        assert_eq!(duplicates["a"][0].text, "grated cheese");
        assert_eq!(duplicates["a"][0].recipe_name, "Lasagna");
        assert_eq!(duplicates["b"][0].text, "cheddar cheese");
        assert_eq!(duplicates["b"][0].recipe_name, "Mac and cheese");
    }

    #[test]
    fn test_entries_without_significant_words_never_grouped() {
        let entries = vec![
            entry("a", "1 egg", "Frittata"),
            entry("b", "1 large egg", "Cake"),
            entry("c", "1 fig", "Salad"),
            entry("d", "4 oz ham", "Tart"),
            entry("e", "ham", "Sandwich"),
        ];

        assert!(significant_words("egg").is_empty());
        assert!(find_duplicates(&entries).is_empty());
    }

    #[test]
    fn test_units_and_descriptors_skipped() {
        assert_eq!(significant_words("fresh ground pepper"), vec!["pepper"]);
        assert_eq!(significant_words("sliced-peeled, cooked pieces"), Vec::<String>::new());
        assert_eq!(duplicate_key("chicken thighs, diced").as_deref(), Some("thighs"));
    }

    #[test]
    fn test_groups_are_not_transitive() {
        // "onion powder" keys on "powder", so it pairs with "garlic powder" and not the onions
        let entries = vec![
            entry("a", "red onion", "Salsa"),
            entry("b", "onion", "Soup"),
            entry("c", "onion powder", "Rub"),
            entry("d", "garlic powder", "Rub"),
        ];

        let duplicates = find_duplicates(&entries);

        assert_eq!(duplicates["a"].len(), 1);
        assert_eq!(duplicates["a"][0].text, "onion");
        assert_eq!(duplicates["c"].len(), 1);
        assert_eq!(duplicates["c"][0].text, "garlic powder");
        assert!(!duplicates["a"].iter().any(|p| p.text == "onion powder"));
    }

    #[test]
    fn test_case_insensitive_keys() {
        let entries = vec![
            entry("a", "Parmesan", "Pasta"),
            entry("b", "grated parmesan", "Risotto"),
        ];
        let duplicates = find_duplicates(&entries);
        assert_eq!(duplicates.len(), 2);
    }
}
