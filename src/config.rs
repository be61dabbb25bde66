//! # Shopping Configuration Module
//!
//! Configuration for list building: the user-curated filter list and the
//! store-section keyword table.

use crate::shop_sections::SectionKeywords;
use log::{debug, info};
use std::env;

// Environment variables read by `ShoppingConfig::from_env` and the binary
pub const EXTRA_FILTERS_ENV: &str = "SHOPPING_EXTRA_FILTERS";
pub const SNAPSHOT_PATH_ENV: &str = "KITCHEN_SNAPSHOT";
pub const DEFAULT_SNAPSHOT_PATH: &str = "kitchen.json";

/// Configuration structure for shopping list derivation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingConfig {
    /// Extra substrings that always demote a recipe entry to the filtered section
    pub extra_filters: Vec<String>,
    /// Keywords used to group the list by store section
    pub section_keywords: SectionKeywords,
}

impl ShoppingConfig {
    /// Build configuration from defaults overridden by environment variables
    ///
    /// `SHOPPING_EXTRA_FILTERS` holds a comma separated filter list.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        match env::var(EXTRA_FILTERS_ENV) {
            Ok(value) => {
                config.extra_filters = parse_filter_list(&value);
                info!(
                    "Loaded {} extra filters from {}",
                    config.extra_filters.len(),
                    EXTRA_FILTERS_ENV
                );
            }
            Err(_) => debug!("{} not set, no extra filters", EXTRA_FILTERS_ENV),
        }

        config
    }

    /// Add filters, skipping blanks and ones already present (case-insensitive)
    pub fn with_extra_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for filter in filters {
            let filter = filter.as_ref().trim();
            if filter.is_empty() {
                continue;
            }
            let exists = self
                .extra_filters
                .iter()
                .any(|f| f.eq_ignore_ascii_case(filter));
            if !exists {
                self.extra_filters.push(filter.to_string());
            }
        }
        self
    }
}

/// Split a comma separated list, trimming entries and dropping blanks
pub fn parse_filter_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
