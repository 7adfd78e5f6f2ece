//! Scarcity-Weighted Cost Evaluation

use rustc_hash::FxHashMap;

use crate::{
    bouquets::Composition, designs::DesignRule, ledger::InventoryLedger, species::Species,
};

/// Cost of taking one flower of `species` out of `ledger`.
///
/// `1.0 - remaining / total`: abundant species are cheap to consume, scarce
/// ones expensive, which steers allocation toward compositions that preserve
/// scarce species for the designs that require them. An empty group prices
/// every unit at `1.0` (there is nothing left to allocate).
pub fn marginal_cost(ledger: &InventoryLedger, species: Species) -> f64 {
    unit_cost(ledger.remaining(species), ledger.remaining_total())
}

/// Result of simulating one design against the current ledger state.
#[derive(Debug, Clone)]
pub struct DesignEstimate {
    /// Total scarcity cost of the simulated composition.
    pub cost: f64,

    /// Concrete species counts the design would consume.
    pub composition: Composition,
}

/// Simulate allocating one bouquet of `rule` against `ledger`, without
/// mutating it.
///
/// Required minimums are consumed unit-by-unit in declaration order, each
/// unit priced against the simulated counts before it is subtracted. The
/// remaining free slots are then filled one at a time with whichever species
/// is currently most abundant (lowest marginal cost), ties going to the
/// lexicographically smallest letter, recomputing the ratios after every
/// unit.
///
/// Returns `None` when the rule is infeasible this round: a required minimum
/// exceeds availability, or a free slot cannot be filled because the group
/// is exhausted. Infeasibility is an expected per-round outcome, not an
/// error.
pub fn estimate(ledger: &InventoryLedger, rule: &DesignRule) -> Option<DesignEstimate> {
    let mut snapshot = Snapshot::of(ledger);
    let mut cost = 0.0;
    let mut composition = Composition::new();

    for (species, minimum) in rule.minimums() {
        if snapshot.remaining(species) < minimum {
            return None;
        }

        for _ in 0..minimum {
            cost += snapshot.take(species);
        }

        composition.add(species, minimum);
    }

    for _ in 0..rule.free_slots() {
        let species = snapshot.most_abundant()?;
        cost += snapshot.take(species);
        composition.add(species, 1);
    }

    Some(DesignEstimate { cost, composition })
}

#[expect(
    clippy::cast_precision_loss,
    reason = "flower counts are far below 2^52"
)]
fn unit_cost(remaining: u64, total: u64) -> f64 {
    if total == 0 {
        return 1.0;
    }

    1.0 - remaining as f64 / total as f64
}

/// Copy-on-read view of a ledger used by the simulation.
#[derive(Debug)]
struct Snapshot {
    counts: FxHashMap<Species, u64>,
    total: u64,
}

impl Snapshot {
    fn of(ledger: &InventoryLedger) -> Self {
        Snapshot {
            counts: ledger.species().into_iter().collect(),
            total: ledger.remaining_total(),
        }
    }

    fn remaining(&self, species: Species) -> u64 {
        self.counts.get(&species).copied().unwrap_or(0)
    }

    /// Price one unit at the current counts, then subtract it.
    ///
    /// Callers only take species with stock remaining.
    fn take(&mut self, species: Species) -> f64 {
        let cost = unit_cost(self.remaining(species), self.total);

        if let Some(count) = self.counts.get_mut(&species) {
            *count = count.saturating_sub(1);
            self.total = self.total.saturating_sub(1);
        }

        cost
    }

    /// Most abundant species with stock remaining, ties broken by the
    /// lexicographically smallest letter. `None` when the group is exhausted.
    fn most_abundant(&self) -> Option<Species> {
        let mut best: Option<(Species, u64)> = None;

        for (&species, &count) in &self.counts {
            if count == 0 {
                continue;
            }

            let better = best.is_none_or(|(best_species, best_count)| {
                count > best_count || (count == best_count && species < best_species)
            });

            if better {
                best = Some((species, count));
            }
        }

        best.map(|(species, _)| species)
    }
}
