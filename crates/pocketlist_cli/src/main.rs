//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `pocketlist_core` linkage and drive both controllers once.
//! - Start file logging at the configured level under the temp directory.
//! - Keep output deterministic for quick local sanity checks.

use pocketlist_core::{
    init_logging, CoreConfig, GroceryItemId, GroceryService, RemovalDecision, StudentService,
    EMPTY_CART_NOTICE, EMPTY_ROSTER_NOTICE,
};
use std::error::Error;
use std::process::ExitCode;

const LOG_DIR_NAME: &str = "pocketlist-cli-logs";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pocketlist_cli failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("pocketlist_core ping={}", pocketlist_core::ping());
    println!("pocketlist_core version={}", pocketlist_core::core_version());

    let config = CoreConfig::from_env()?;
    println!("cart_removal_policy={}", config.cart_removal_policy);

    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    match init_logging(config.log_level, &log_dir.to_string_lossy()) {
        Ok(()) => println!("log_level={} log_dir={}", config.log_level, log_dir.display()),
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    let mut roster = StudentService::with_demo_roster();
    let added = roster.add("Test Student")?;
    print_roster("roster after add", &roster);

    let pending = roster.request_remove(added.roll_number);
    roster.resolve_remove(pending, RemovalDecision::Delete);
    roster.set_search_text("02");
    print_roster("roster search `02`", &roster);

    let mut groceries = GroceryService::with_demo_catalog(config.cart_removal_policy);
    for id in ["1", "1", "2"] {
        groceries.add_to_cart(&GroceryItemId::new(id)?)?;
    }
    println!("cart entries={} total={}", groceries.cart().len(), groceries.total());
    groceries.remove_from_cart(&GroceryItemId::new("1")?);
    println!("cart entries={} total={}", groceries.cart().len(), groceries.total());
    groceries.clear_cart();
    if groceries.cart().is_empty() {
        println!("{EMPTY_CART_NOTICE}");
    }

    Ok(())
}

fn print_roster<R: pocketlist_core::StudentRepository>(title: &str, roster: &StudentService<R>) {
    println!("{title}:");
    let lines = roster.display_lines();
    if lines.is_empty() {
        println!("  {EMPTY_ROSTER_NOTICE}");
    }
    for line in lines {
        println!("  {line}");
    }
}
