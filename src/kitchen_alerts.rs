//! # Kitchen Alerts
//!
//! Reminders derived from the plan and the stock: freezer items to take out
//! ahead of the day they are cooked, and fridge items flagged "use soon" that no
//! planned dinner uses.

use crate::normalizer::normalize_ingredient;
use crate::shopping_types::{FreezerItem, Freshness, FridgeItem, PlanDay};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A freezer item needed by a planned recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThawTask {
    /// "thaw:<day>:<ingredient>", stable across rebuilds
    pub key: String,
    /// Ingredient line as written in the recipe
    pub ingredient: String,
    pub day: String,
    pub done: bool,
}

/// Planned ingredients whose normalized name matches a freezer item, in plan order
pub fn thaw_tasks(plan: &[PlanDay], freezer: &[FreezerItem], done_keys: &HashSet<String>) -> Vec<ThawTask> {
    let freezer_names: HashSet<String> = freezer.iter().map(|i| i.item.trim().to_lowercase()).collect();
    if freezer_names.is_empty() {
        return Vec::new();
    }

    let mut tasks = Vec::new();
    for day in plan {
        for (_, recipe) in day.recipes() {
            for ingredient in &recipe.ingredients {
                if ingredient.trim().is_empty() {
                    continue;
                }
                let name = normalize_ingredient(ingredient).to_lowercase();
                if !freezer_names.contains(&name) {
                    continue;
                }
                let key = format!("thaw:{}:{}", day.day, ingredient);
                tasks.push(ThawTask {
                    done: done_keys.contains(&key),
                    key,
                    ingredient: ingredient.clone(),
                    day: day.day.clone(),
                });
            }
        }
    }

    debug!("{} thaw tasks for the week", tasks.len());
    tasks
}

/// Fridge items marked "use soon" that no planned recipe calls for
pub fn use_soon_alerts<'a>(plan: &[PlanDay], fridge: &'a [FridgeItem]) -> Vec<&'a FridgeItem> {
    let planned: HashSet<String> = plan
        .iter()
        .flat_map(|day| day.recipes())
        .flat_map(|(_, recipe)| recipe.ingredients.iter())
        .filter(|i| !i.trim().is_empty())
        .map(|i| normalize_ingredient(i).to_lowercase())
        .collect();

    fridge
        .iter()
        .filter(|item| item.freshness == Freshness::Soon)
        .filter(|item| !planned.contains(&item.item.trim().to_lowercase()))
        .collect()
}
