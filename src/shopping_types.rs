//! # Shopping Types Module
//!
//! Input records supplied by the surrounding meal-planning application and the
//! line items the shopping list is built from.
//!
//! ## Core Concepts
//!
//! - **PlanDay**: one day of the week plan with its planned dinners or notes
//! - **Staple**: a pantry item tracked as stocked or needing restock
//! - **FridgeItem / FreezerItem**: food already on hand, matched by name
//! - **ShoppingEntry**: one checkable line on the derived list
//!
//! All records are plain values with serde support so they can be handed over
//! from the application's storage layer as JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provenance label used for staples that need restocking
pub const RESTOCK_SOURCE: &str = "restock";
/// Recipe label used for staples that need restocking
pub const RESTOCK_RECIPE_NAME: &str = "pantry restock";
/// Recipe label used when a planned recipe has no title
pub const UNKNOWN_RECIPE_NAME: &str = "Unknown";
/// Provenance label used for weekly regulars
pub const REGULAR_SOURCE: &str = "every week";
/// Recipe label used for weekly regulars
pub const REGULAR_RECIPE_NAME: &str = "weekly regular";

/// A recipe as stored in the recipe library
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: String,
    /// Display title; may be missing for half-imported recipes
    #[serde(default)]
    pub title: Option<String>,
    /// Raw ingredient lines as authored ("1/2 lb salmon fillet")
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(id: &str, title: &str, ingredients: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: Some(title.to_string()),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }

    /// Title for display, falling back to "Unknown"
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => UNKNOWN_RECIPE_NAME,
        }
    }
}

/// What occupies a slot in the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlannedContent {
    /// Free text such as "leftovers" or "eating out"
    Note { text: String },
    Recipe { recipe: Recipe },
}

/// One item planned for a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedItem {
    pub item_id: String,
    #[serde(flatten)]
    pub content: PlannedContent,
}

impl PlannedItem {
    pub fn recipe(item_id: &str, recipe: Recipe) -> Self {
        Self {
            item_id: item_id.to_string(),
            content: PlannedContent::Recipe { recipe },
        }
    }

    pub fn note(item_id: &str, text: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
            content: PlannedContent::Note {
                text: text.to_string(),
            },
        }
    }

    pub fn as_recipe(&self) -> Option<&Recipe> {
        match &self.content {
            PlannedContent::Recipe { recipe } => Some(recipe),
            PlannedContent::Note { .. } => None,
        }
    }
}

/// One day of the plan, in display order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanDay {
    /// Day label used as provenance ("Mon")
    pub day: String,
    #[serde(default)]
    pub items: Vec<PlannedItem>,
}

impl PlanDay {
    pub fn new(day: &str, items: Vec<PlannedItem>) -> Self {
        Self {
            day: day.to_string(),
            items,
        }
    }

    /// Planned recipes of this day with their item ids, notes skipped
    pub fn recipes(&self) -> impl Iterator<Item = (&str, &Recipe)> {
        self.items
            .iter()
            .filter_map(|item| item.as_recipe().map(|r| (item.item_id.as_str(), r)))
    }
}

/// Stock status of a staple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StapleStatus {
    /// Stocked: suppress from the list
    Ok,
    /// Running low: always on the list
    Restock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staple {
    pub name: String,
    pub status: StapleStatus,
}

impl Staple {
    pub fn stocked(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: StapleStatus::Ok,
        }
    }

    pub fn restock(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: StapleStatus::Restock,
        }
    }

    pub fn is_stocked(&self) -> bool {
        self.status == StapleStatus::Ok
    }
}

/// Freshness marker on fridge items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    #[default]
    Ok,
    /// Should be used up this week
    Soon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FridgeItem {
    pub item: String,
    #[serde(default)]
    pub freshness: Freshness,
}

impl FridgeItem {
    pub fn new(item: &str) -> Self {
        Self {
            item: item.to_string(),
            freshness: Freshness::Ok,
        }
    }

    pub fn use_soon(item: &str) -> Self {
        Self {
            item: item.to_string(),
            freshness: Freshness::Soon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreezerItem {
    pub item: String,
    /// Stock count (pounds or packs), informational only
    #[serde(default)]
    pub qty: Option<u32>,
}

impl FreezerItem {
    pub fn new(item: &str) -> Self {
        Self {
            item: item.to_string(),
            qty: None,
        }
    }
}

/// A shopping item typed in by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeEntry {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl FreeEntry {
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            done: false,
        }
    }
}

/// Something bought every week regardless of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regular {
    pub id: String,
    pub name: String,
}

impl Regular {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Where a shopping entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Restock,
    Recipe,
    Free,
    Regular,
}

/// One line on the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingEntry {
    /// Stable within a planning period
    pub id: String,
    /// Normalized name shown to the user
    pub text: String,
    /// Comma-joined days or labels that contributed this entry; `None` for free entries
    pub source: Option<String>,
    /// Comma-joined recipe titles, merged the same way as `source`
    pub recipe_name: String,
    pub kind: EntryKind,
    pub done: bool,
}

impl ShoppingEntry {
    pub fn restock(name: &str) -> Self {
        Self {
            id: format!("staple:{}", name),
            text: name.to_string(),
            source: Some(RESTOCK_SOURCE.to_string()),
            recipe_name: RESTOCK_RECIPE_NAME.to_string(),
            kind: EntryKind::Restock,
            done: false,
        }
    }

    pub fn from_recipe(id: String, text: String, day: &str, recipe_name: &str) -> Self {
        Self {
            id,
            text,
            source: Some(day.to_string()),
            recipe_name: recipe_name.to_string(),
            kind: EntryKind::Recipe,
            done: false,
        }
    }

    pub fn from_free(entry: &FreeEntry) -> Self {
        Self {
            id: entry.id.clone(),
            text: entry.text.clone(),
            source: None,
            recipe_name: UNKNOWN_RECIPE_NAME.to_string(),
            kind: EntryKind::Free,
            done: entry.done,
        }
    }

    pub fn from_regular(regular: &Regular) -> Self {
        Self {
            id: regular.id.clone(),
            text: regular.name.clone(),
            source: Some(REGULAR_SOURCE.to_string()),
            recipe_name: REGULAR_RECIPE_NAME.to_string(),
            kind: EntryKind::Regular,
            done: false,
        }
    }

    /// Fold another contributor's provenance into this entry
    pub fn absorb(&mut self, other: &ShoppingEntry) {
        if let Some(other_source) = &other.source {
            self.source = Some(match self.source.take() {
                Some(source) => format!("{}, {}", source, other_source),
                None => other_source.clone(),
            });
        }
        self.recipe_name = format!("{}, {}", self.recipe_name, other.recipe_name);
    }

    pub fn is_restock(&self) -> bool {
        self.kind == EntryKind::Restock
    }
}

impl fmt::Display for ShoppingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.done { "[x]" } else { "[ ]" };
        match &self.source {
            Some(source) => write!(f, "{} {} ({})", check, self.text, source),
            None => write!(f, "{} {}", check, self.text),
        }
    }
}

/// Another entry that probably names the same purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicatePartner {
    pub text: String,
    pub recipe_name: String,
}
