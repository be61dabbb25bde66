//! # Shop Sections
//!
//! Groups shopping entries by the part of the store they are bought in, using
//! substring keyword matching on the entry text.

use crate::shopping_types::ShoppingEntry;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Store section, declared in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopSection {
    Produce,
    Meat,
    Dairy,
    Pantry,
    Bread,
    Frozen,
    Other,
}

impl ShopSection {
    pub const ALL: [ShopSection; 7] = [
        ShopSection::Produce,
        ShopSection::Meat,
        ShopSection::Dairy,
        ShopSection::Pantry,
        ShopSection::Bread,
        ShopSection::Frozen,
        ShopSection::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ShopSection::Produce => "produce",
            ShopSection::Meat => "meat",
            ShopSection::Dairy => "dairy",
            ShopSection::Pantry => "pantry",
            ShopSection::Bread => "bread",
            ShopSection::Frozen => "frozen",
            ShopSection::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShopSection::Produce => "Produce",
            ShopSection::Meat => "Meat & Fish",
            ShopSection::Dairy => "Dairy & Eggs",
            ShopSection::Pantry => "Pantry & Dry Goods",
            ShopSection::Bread => "Bread & Bakery",
            ShopSection::Frozen => "Frozen",
            ShopSection::Other => "Other",
        }
    }
}

impl fmt::Display for ShopSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

const PRODUCE_KEYWORDS: &[&str] = &[
    "apple", "apples", "avocado", "banana", "basil", "bean", "beans", "beet",
    "bell pepper", "broccoli", "cabbage", "carrot", "carrots", "cauliflower",
    "celery", "cilantro", "corn", "cucumber", "dill", "eggplant", "fennel",
    "garlic", "ginger", "grape", "grapes", "green bean", "herb", "jalapeño",
    "kale", "leek", "lemon", "lemons", "lettuce", "lime", "limes", "mango",
    "mint", "mushroom", "mushrooms", "onion", "onions", "orange", "parsley",
    "peach", "pear", "peas", "pepper", "peppers", "potato", "potatoes",
    "radish", "rosemary", "sage", "scallion", "shallot", "spinach", "squash",
    "strawberry", "sweet potato", "thyme", "tomato", "tomatoes", "zucchini",
];

const MEAT_KEYWORDS: &[&str] = &[
    "anchovy", "bacon", "beef", "chicken", "chorizo", "clam", "cod", "crab",
    "duck", "fish", "ground beef", "ground pork", "ground turkey", "ham",
    "lamb", "lobster", "pancetta", "pork", "prosciutto", "salmon", "sausage",
    "scallop", "shrimp", "steak", "tilapia", "tuna", "turkey",
];

const DAIRY_KEYWORDS: &[&str] = &[
    "butter", "cheddar", "cheese", "cottage cheese", "cream", "cream cheese",
    "egg", "eggs", "feta", "goat cheese", "gruyere", "half and half",
    "heavy cream", "mascarpone", "milk", "mozzarella", "parmesan", "pecorino",
    "ricotta", "sour cream", "whipped cream", "yogurt",
];

const PANTRY_KEYWORDS: &[&str] = &[
    "baking powder", "baking soda", "bean", "beans", "broth", "brown sugar",
    "buckwheat", "canned", "cannellini", "chickpea", "chickpeas", "chocolate",
    "cocoa", "coconut milk", "cornstarch", "couscous", "ditalini", "dried",
    "extract", "fish sauce", "flour", "honey", "hot sauce", "jam", "ketchup",
    "lentil", "lentils", "maple syrup", "mayonnaise", "mirin", "miso",
    "mustard", "noodle", "noodles", "nutritional yeast", "oat", "oats", "oil",
    "olive oil", "oregano", "panko", "paprika", "pasta", "pepper flakes",
    "quinoa", "rice", "rice vinegar", "salt", "sesame oil", "soy sauce",
    "spice", "stock", "sugar", "tahini", "tomato paste", "vanilla", "vinegar",
    "worcestershire",
];

const BREAD_KEYWORDS: &[&str] = &[
    "baguette", "bread", "brioche", "bun", "buns", "ciabatta", "crouton",
    "english muffin", "flatbread", "naan", "pita", "roll", "rolls",
    "sourdough", "tortilla", "tortillas", "wrap",
];

const FROZEN_KEYWORDS: &[&str] = &["frozen", "ice cream", "popsicle"];

/// Keyword table per section; `Other` never has keywords
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionKeywords {
    keywords: HashMap<ShopSection, Vec<String>>,
}

impl SectionKeywords {
    pub fn empty() -> Self {
        Self {
            keywords: HashMap::new(),
        }
    }

    /// Replace the keywords of one section
    pub fn with_section(mut self, section: ShopSection, keywords: &[&str]) -> Self {
        self.set(section, keywords.iter().map(|k| k.to_string()).collect());
        self
    }

    pub fn set(&mut self, section: ShopSection, keywords: Vec<String>) {
        if section == ShopSection::Other {
            return;
        }
        let keywords = keywords
            .into_iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self.keywords.insert(section, keywords);
    }

    pub fn get(&self, section: ShopSection) -> &[String] {
        self.keywords
            .get(&section)
            .map(|k| k.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for SectionKeywords {
    fn default() -> Self {
        Self::empty()
            .with_section(ShopSection::Produce, PRODUCE_KEYWORDS)
            .with_section(ShopSection::Meat, MEAT_KEYWORDS)
            .with_section(ShopSection::Dairy, DAIRY_KEYWORDS)
            .with_section(ShopSection::Pantry, PANTRY_KEYWORDS)
            .with_section(ShopSection::Bread, BREAD_KEYWORDS)
            .with_section(ShopSection::Frozen, FROZEN_KEYWORDS)
    }
}

/// Section of an ingredient name; the first section in display order wins
pub fn section_for(text: &str, keywords: &SectionKeywords) -> ShopSection {
    let lower = text.to_lowercase();
    let section = ShopSection::ALL
        .iter()
        .copied()
        .filter(|section| *section != ShopSection::Other)
        .find(|section| keywords.get(*section).iter().any(|kw| lower.contains(kw.as_str())))
        .unwrap_or(ShopSection::Other);
    trace!("Section for '{}': {}", text, section.id());
    section
}

/// Group entries by section in display order, dropping empty sections
pub fn group_by_section<'a>(
    entries: &'a [ShoppingEntry],
    keywords: &SectionKeywords,
) -> Vec<(ShopSection, Vec<&'a ShoppingEntry>)> {
    let mut buckets: HashMap<ShopSection, Vec<&'a ShoppingEntry>> = HashMap::new();
    for entry in entries {
        buckets
            .entry(section_for(&entry.text, keywords))
            .or_default()
            .push(entry);
    }

    ShopSection::ALL
        .iter()
        .filter_map(|section| buckets.remove(section).map(|items| (*section, items)))
        .collect()
}
