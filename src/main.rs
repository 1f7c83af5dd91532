use anyhow::{Context, Result};
use log::{info, warn};
use meal_planner::catalog::{load_snapshot, Catalog};
use meal_planner::localization::{LocalizationManager, DEFAULT_LANGUAGE};
use meal_planner::plan_config::PlannerConfig;
use meal_planner::plan_report::{render_plan_report, PlanOutcome};
use meal_planner::shopping_list::CheckedItems;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting meal planner");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let export_only = env::args().skip(1).any(|arg| arg == "--export");

    let config = PlannerConfig::from_env()?;
    let snapshot_path = config
        .snapshot_path
        .clone()
        .context("Snapshot path missing from configuration")?;

    let snapshot = load_snapshot(&snapshot_path).await?;
    let catalog = Catalog::from_snapshot(&snapshot)?;

    let outcome = PlanOutcome::for_catalog(&catalog, &config.section_order);

    if export_only {
        let export = outcome
            .shopping_list
            .export_unchecked(&outcome.recipe_titles(), &CheckedItems::new());
        if !export.is_empty() {
            println!("{export}");
        }
        return Ok(());
    }

    let localization = LocalizationManager::new()?;
    let language = if localization.is_supported(&config.language) {
        config.language.as_str()
    } else {
        warn!(
            "Language '{}' not available, using {}",
            config.language, DEFAULT_LANGUAGE
        );
        DEFAULT_LANGUAGE
    };

    print!("{}", render_plan_report(&outcome, &localization, language));

    Ok(())
}
