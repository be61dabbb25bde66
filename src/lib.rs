//! # Shopping List
//!
//! Derives a household's weekly shopping list from planned dinners and kitchen
//! stock: ingredient lines are normalized to plain food names, items already in
//! the pantry, fridge or freezer are suppressed, repeats are merged, probable
//! pantry staples are filtered, and differently-worded duplicates are flagged.

pub mod config;
pub mod duplicates;
pub mod errors;
pub mod ingredient_patterns;
pub mod kitchen_alerts;
pub mod normalizer;
pub mod shop_sections;
pub mod shopping_list;
pub mod shopping_types;
pub mod snapshot;
