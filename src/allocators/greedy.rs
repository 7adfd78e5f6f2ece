//! Greedy Allocator

use crate::{
    allocators::{AllocationError, Allocator},
    bouquets::{Bouquet, BouquetCollection},
    cost::{self, DesignEstimate},
    designs::{DesignCatalog, DesignKey, DesignRule},
    ledger::InventoryLedger,
    species::SizeGroup,
};

/// Allocator that repeatedly commits the cheapest feasible design.
///
/// Each round simulates every design of the group against the current ledger
/// and commits the candidate with the strictly lowest scarcity cost; on
/// equal costs the first-declared design wins. The loop terminates when no
/// design is feasible, which is guaranteed because every commit strictly
/// decreases the remaining inventory.
#[derive(Debug)]
pub struct GreedyAllocator;

impl Allocator for GreedyAllocator {
    fn allocate(
        catalog: &DesignCatalog,
        group: SizeGroup,
        ledger: &mut InventoryLedger,
    ) -> Result<BouquetCollection, AllocationError> {
        let mut bouquets = BouquetCollection::new(group);

        loop {
            let Some((key, chosen)) = cheapest_candidate(catalog, group, ledger) else {
                break;
            };

            commit(catalog, key, &chosen, ledger)?;
            bouquets.push(Bouquet::new(key, chosen.composition));
        }

        Ok(bouquets)
    }
}

/// Evaluate every design of the group and pick the cheapest feasible one.
///
/// Strict `<` comparison over declaration order makes the first-declared
/// design win ties.
fn cheapest_candidate(
    catalog: &DesignCatalog,
    group: SizeGroup,
    ledger: &InventoryLedger,
) -> Option<(DesignKey, DesignEstimate)> {
    let mut best: Option<(DesignKey, DesignEstimate)> = None;

    for (key, rule) in catalog.group(group) {
        let Some(found) = cost::estimate(ledger, rule) else {
            continue;
        };

        let better = best
            .as_ref()
            .is_none_or(|(_, current)| found.cost < current.cost);

        if better {
            best = Some((key, found));
        }
    }

    best
}

/// Subtract the chosen composition from the real ledger.
fn commit(
    catalog: &DesignCatalog,
    key: DesignKey,
    chosen: &DesignEstimate,
    ledger: &mut InventoryLedger,
) -> Result<(), AllocationError> {
    let design = catalog
        .get(key)
        .map_or_else(|| "?".to_string(), DesignRule::code);

    for (species, count) in &chosen.composition {
        ledger
            .decrement(species, count)
            .map_err(|source| AllocationError::Underflow {
                design: design.clone(),
                source,
            })?;
    }

    Ok(())
}
