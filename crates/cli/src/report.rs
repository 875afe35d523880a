//! The fixed report sequence and its textual format.

use std::io::{self, Write};

use stocktally_inventory::{Inventory, Product};

use crate::input::Scenario;

/// Runs the fixed query sequence against `inventory` and writes the report:
/// category listing, name-search listing, total value, per-category counts,
/// full grouped listing, then removal of every entry matching the
/// scenario's delete name and the recomputed total.
pub fn write_report(
    inventory: &mut Inventory,
    scenario: &Scenario,
    mut out: impl Write,
) -> io::Result<()> {
    writeln!(out, "{}:", scenario.category_query)?;
    for product in inventory.products_in_category(&scenario.category_query) {
        write_listing_line(&mut out, &product)?;
    }

    writeln!(out, "{}:", scenario.name_query)?;
    for product in inventory.search_by_name(&scenario.name_query) {
        write_listing_line(&mut out, &product)?;
    }

    writeln!(out, "Total Value:${}", inventory.total_value())?;

    for (category, count) in inventory.category_counts() {
        writeln!(out, "{category}:{count}")?;
    }

    for (category, products) in inventory.grouped_by_category() {
        writeln!(out, "{category}:")?;
        for product in products {
            writeln!(
                out,
                "Product Name:{} Price:{}",
                product.name(),
                product.price()
            )?;
        }
    }

    let doomed = inventory.search_by_name(&scenario.remove_name);
    tracing::debug!(
        matched = doomed.len(),
        name = %scenario.remove_name,
        "removing matched products"
    );
    for product in &doomed {
        inventory.remove(product);
    }
    writeln!(out, "New Total Value:${}", inventory.total_value())?;

    Ok(())
}

fn write_listing_line(out: &mut impl Write, product: &Product) -> io::Result<()> {
    writeln!(
        out,
        "Product Name:{} Category:{}",
        product.name(),
        product.category()
    )
}
