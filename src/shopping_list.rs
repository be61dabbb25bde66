//! # Shopping List Builder
//!
//! Derives the week's shopping list from the plan and the kitchen stock.
//!
//! ## Rules
//!
//! - Staples marked for restock are always listed first
//! - Recipe ingredients are normalized, then **suppressed** when their name
//!   exactly matches (case-insensitive) a stocked staple, a fridge item or a
//!   freezer item
//! - Surviving ingredients with the same name are merged into one entry whose
//!   provenance lists every contributing day and recipe
//! - Free-form entries are appended untouched
//! - Entries whose name *contains* a stocked staple or an extra filter string are
//!   **filtered**: moved to a separate section unless the user pinned them back
//! - Possible duplicates are flagged across the main list
//!
//! The list is a derived view: it is rebuilt from scratch on every call and
//! nothing here holds state between calls.
//!
//! ## Usage
//!
//! ```rust
//! use shopping_list::config::ShoppingConfig;
//! use shopping_list::shopping_list::{KitchenState, SessionOverrides, ShoppingListBuilder};
//! use shopping_list::shopping_types::{PlanDay, PlannedItem, Recipe};
//!
//! let state = KitchenState {
//!     plan: vec![PlanDay::new(
//!         "Mon",
//!         vec![PlannedItem::recipe("1", Recipe::new("r1", "Tacos", &["2 cups lettuce"]))],
//!     )],
//!     ..Default::default()
//! };
//!
//! let builder = ShoppingListBuilder::new(ShoppingConfig::default());
//! let list = builder.build(&state, &SessionOverrides::default());
//!
//! assert_eq!(list.main[0].text, "lettuce");
//! ```

use crate::config::ShoppingConfig;
use crate::duplicates::{find_duplicates, DuplicateMap};
use crate::normalizer::normalize_ingredient;
use crate::shop_sections::{group_by_section, SectionKeywords, ShopSection};
use crate::shopping_types::{
    EntryKind, FreeEntry, FreezerItem, FridgeItem, PlanDay, Regular, ShoppingEntry, Staple,
};
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Everything the list is derived from, as supplied by the application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitchenState {
    #[serde(default)]
    pub plan: Vec<PlanDay>,
    #[serde(default)]
    pub staples: Vec<Staple>,
    #[serde(default)]
    pub freezer: Vec<FreezerItem>,
    #[serde(default)]
    pub fridge: Vec<FridgeItem>,
    #[serde(default)]
    pub free_entries: Vec<FreeEntry>,
    #[serde(default)]
    pub regulars: Vec<Regular>,
}

/// Caller-owned view state passed into every build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionOverrides {
    /// Entry ids the user moved back from the filtered section
    #[serde(default)]
    pub unfiltered: HashSet<String>,
    /// Ids of recipe, restock and regular entries ticked off
    #[serde(default)]
    pub checked: HashSet<String>,
}

/// The derived list, ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingList {
    pub main: Vec<ShoppingEntry>,
    /// Probably already in the pantry; shown collapsed
    pub filtered: Vec<ShoppingEntry>,
    /// Possible duplicates among `main`, keyed by entry id
    pub duplicates: DuplicateMap,
    /// Bought every week regardless of the plan
    pub regulars: Vec<ShoppingEntry>,
}

impl ShoppingList {
    /// Entries in `main` and regulars not yet ticked off
    pub fn pending_count(&self) -> usize {
        self.main
            .iter()
            .chain(self.regulars.iter())
            .filter(|e| !e.done)
            .count()
    }

    pub fn unchecked(&self) -> Vec<&ShoppingEntry> {
        self.main.iter().filter(|e| !e.done).collect()
    }

    pub fn checked(&self) -> Vec<&ShoppingEntry> {
        self.main.iter().filter(|e| e.done).collect()
    }

    pub fn is_flagged(&self, id: &str) -> bool {
        self.duplicates.contains_key(id)
    }

    /// `main` grouped by store section
    pub fn sections(&self, keywords: &SectionKeywords) -> Vec<(ShopSection, Vec<&ShoppingEntry>)> {
        group_by_section(&self.main, keywords)
    }
}

/// Lowercased names used for suppression and filtering
struct StockNames {
    stocked_staples: HashSet<String>,
    freezer: HashSet<String>,
    fridge: HashSet<String>,
}

impl StockNames {
    fn from_state(state: &KitchenState) -> Self {
        Self {
            stocked_staples: state
                .staples
                .iter()
                .filter(|s| s.is_stocked())
                .map(|s| stock_key(&s.name))
                .filter(|s| !s.is_empty())
                .collect(),
            freezer: state.freezer.iter().map(|i| stock_key(&i.item)).collect(),
            fridge: state.fridge.iter().map(|i| stock_key(&i.item)).collect(),
        }
    }

    /// Exact, case-insensitive match against stock on hand
    fn covers(&self, text: &str) -> bool {
        let key = stock_key(text);
        self.stocked_staples.contains(&key)
            || self.freezer.contains(&key)
            || self.fridge.contains(&key)
    }
}

fn stock_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Builds shopping lists for one configuration
pub struct ShoppingListBuilder {
    config: ShoppingConfig,
}

impl ShoppingListBuilder {
    pub fn new(config: ShoppingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShoppingConfig {
        &self.config
    }

    /// Derive the shopping list from the current kitchen state
    pub fn build(&self, state: &KitchenState, session: &SessionOverrides) -> ShoppingList {
        let stock = StockNames::from_state(state);

        let mut candidates: Vec<ShoppingEntry> = state
            .staples
            .iter()
            .filter(|s| !s.is_stocked())
            .map(|s| ShoppingEntry::restock(&s.name))
            .collect();

        candidates.extend(merge_by_text(recipe_entries(&state.plan, &stock)));

        for entry in candidates.iter_mut() {
            entry.done = session.checked.contains(&entry.id);
        }

        candidates.extend(state.free_entries.iter().map(ShoppingEntry::from_free));

        let (main, filtered): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|entry| !self.is_filtered(entry, &stock, session));

        let duplicates = find_duplicates(&main);

        let regulars = state
            .regulars
            .iter()
            .map(|r| {
                let mut entry = ShoppingEntry::from_regular(r);
                entry.done = session.checked.contains(&entry.id);
                entry
            })
            .collect();

        info!(
            "Built shopping list: {} main, {} filtered, {} flagged as possible duplicates",
            main.len(),
            filtered.len(),
            duplicates.len()
        );

        ShoppingList {
            main,
            filtered,
            duplicates,
            regulars,
        }
    }

    /// Recipe entries containing a stocked staple or an extra filter string
    fn is_filtered(&self, entry: &ShoppingEntry, stock: &StockNames, session: &SessionOverrides) -> bool {
        if entry.kind != EntryKind::Recipe {
            return false;
        }
        if session.unfiltered.contains(&entry.id) {
            trace!("'{}' pinned to main by the user", entry.text);
            return false;
        }

        let text = entry.text.to_lowercase();
        let matched = stock
            .stocked_staples
            .iter()
            .map(String::as_str)
            .chain(
                self.config
                    .extra_filters
                    .iter()
                    .map(|f| f.trim())
                    .filter(|f| !f.is_empty()),
            )
            .find(|name| text.contains(&name.to_lowercase()));

        if let Some(name) = matched {
            debug!("Filtered '{}' (contains '{}')", entry.text, name);
        }
        matched.is_some()
    }
}

impl Default for ShoppingListBuilder {
    fn default() -> Self {
        Self::new(ShoppingConfig::default())
    }
}

/// One raw entry per planned ingredient that is not already in stock
fn recipe_entries(plan: &[PlanDay], stock: &StockNames) -> Vec<ShoppingEntry> {
    let mut entries = Vec::new();

    for day in plan {
        for (item_id, recipe) in day.recipes() {
            for ingredient in &recipe.ingredients {
                if ingredient.trim().is_empty() {
                    continue;
                }

                let text = normalize_ingredient(ingredient);
                if stock.covers(&text) {
                    debug!("Suppressed '{}' on {}: already in stock", text, day.day);
                    continue;
                }

                let id = format!("{}:{}:{}", day.day, item_id, ingredient);
                entries.push(ShoppingEntry::from_recipe(
                    id,
                    text,
                    &day.day,
                    recipe.display_title(),
                ));
            }
        }
    }

    entries
}

/// Collapse entries with identical text, first occurrence keeps its id
fn merge_by_text(entries: Vec<ShoppingEntry>) -> Vec<ShoppingEntry> {
    let mut merged: Vec<ShoppingEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        match positions.get(&entry.text) {
            Some(&position) => merged[position].absorb(&entry),
            None => {
                positions.insert(entry.text.clone(), merged.len());
                merged.push(entry);
            }
        }
    }

    merged
}
