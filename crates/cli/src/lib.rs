//! Driver for the stocktally report: a scenario on stdin in, the
//! fixed-format report on stdout out.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use stocktally_inventory::Inventory;

pub mod input;
pub mod report;

pub use input::{read_scenario, InputError, Scenario};
pub use report::write_report;

/// Reads a scenario from `reader`, loads the store, and writes the full
/// report to `writer`.
pub fn run(reader: impl BufRead, writer: impl Write) -> Result<()> {
    let scenario = input::read_scenario(reader).context("failed to read inventory scenario")?;
    tracing::info!(products = scenario.products.len(), "scenario loaded");

    let mut inventory = Inventory::new();
    for product in scenario.products.iter().cloned() {
        inventory.add(product);
    }

    report::write_report(&mut inventory, &scenario, writer).context("failed to write report")
}
