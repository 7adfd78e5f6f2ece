//! Allocation Summary Reporting

use std::{fmt::Write as _, io};

use rustc_hash::FxHashMap;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    bouquets::BouquetCollection,
    designs::{DesignCatalog, DesignKey},
    ledger::InventoryLedger,
};

/// Errors raised while writing a summary report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Write a per-group allocation summary: one row per design with the number
/// of bouquets formed and flowers consumed, followed by the remaining
/// inventory.
///
/// # Errors
///
/// Returns a [`ReportError`] if writing to the sink fails.
pub fn write_summary(
    mut out: impl io::Write,
    catalog: &DesignCatalog,
    collection: &BouquetCollection,
    ledger: &InventoryLedger,
) -> Result<(), ReportError> {
    let group = collection.group();

    let mut per_design: FxHashMap<DesignKey, (u64, u64)> = FxHashMap::default();

    for bouquet in collection {
        let entry = per_design.entry(bouquet.design()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += bouquet.composition().total();
    }

    let mut builder = Builder::default();
    builder.push_record(["Design", "Bouquets", "Flowers"]);

    let mut bouquet_total = 0;
    let mut flower_total = 0;

    for (key, rule) in catalog.group(group) {
        let (bouquets, flowers) = per_design.get(&key).copied().unwrap_or((0, 0));
        bouquet_total += bouquets;
        flower_total += flowers;

        builder.push_record([rule.code(), bouquets.to_string(), flowers.to_string()]);
    }

    builder.push_record([
        "total".to_string(),
        bouquet_total.to_string(),
        flower_total.to_string(),
    ]);

    let mut table = builder.build();
    table
        .with(Style::sharp())
        .modify(Columns::new(1..), Alignment::right());

    writeln!(out, "{group} bouquets")?;
    writeln!(out, "{table}")?;
    writeln!(out, "remaining: {}", remaining_line(ledger))?;

    Ok(())
}

/// Render the remaining inventory as `3a 1b (4 flowers)`.
fn remaining_line(ledger: &InventoryLedger) -> String {
    if ledger.is_empty() {
        return "none".to_string();
    }

    let mut line = String::new();

    for (species, count) in ledger.species() {
        if count == 0 {
            continue;
        }

        if !line.is_empty() {
            line.push(' ');
        }

        let _ = write!(line, "{count}{species}");
    }

    let total = ledger.remaining_total();
    let _ = write!(line, " ({total} flowers)");

    line
}

/// Write summaries for both size groups in output order.
///
/// # Errors
///
/// Returns a [`ReportError`] if writing to the sink fails.
pub fn write_summaries(
    mut out: impl io::Write,
    catalog: &DesignCatalog,
    results: &[(BouquetCollection, InventoryLedger)],
) -> Result<(), ReportError> {
    for (collection, ledger) in results {
        write_summary(&mut out, catalog, collection, ledger)?;
    }

    Ok(())
}
