use anyhow::{Context, Result};
use log::info;
use serde_json::json;
use shopping_list::config::{ShoppingConfig, DEFAULT_SNAPSHOT_PATH, SNAPSHOT_PATH_ENV};
use shopping_list::kitchen_alerts::{thaw_tasks, use_soon_alerts};
use shopping_list::shopping_list::ShoppingListBuilder;
use shopping_list::snapshot::load_snapshot;
use std::collections::HashSet;
use std::env;

fn main() -> Result<()> {
    // Load environment variables from .env file, RUST_LOG included
    dotenv::dotenv().ok();

    env_logger::init();

    let snapshot_path = env::args()
        .nth(1)
        .or_else(|| env::var(SNAPSHOT_PATH_ENV).ok())
        .unwrap_or_else(|| DEFAULT_SNAPSHOT_PATH.to_string());

    let snapshot = load_snapshot(&snapshot_path)
        .with_context(|| format!("Failed to load kitchen snapshot from {}", snapshot_path))?;

    let config = ShoppingConfig::from_env().with_extra_filters(&snapshot.extra_filters);
    let builder = ShoppingListBuilder::new(config);
    let list = builder.build(&snapshot.state, &snapshot.session());

    let sections: Vec<_> = list
        .sections(&builder.config().section_keywords)
        .into_iter()
        .map(|(section, entries)| {
            json!({
                "section": section.id(),
                "label": section.label(),
                "entries": entries.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            })
        })
        .collect();

    let state = &snapshot.state;
    let output = json!({
        "main": list.main,
        "filtered": list.filtered,
        "duplicates": list.duplicates,
        "regulars": list.regulars,
        "sections": sections,
        "thaw_tasks": thaw_tasks(&state.plan, &state.freezer, &HashSet::new()),
        "use_soon": use_soon_alerts(&state.plan, &state.fridge),
        "pending": list.pending_count(),
    });

    info!("Shopping list has {} pending items", list.pending_count());

    let rendered = serde_json::to_string_pretty(&output).context("Failed to render shopping list")?;
    println!("{}", rendered);

    Ok(())
}
