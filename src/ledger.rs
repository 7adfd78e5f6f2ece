//! Inventory Ledger

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::species::Species;

/// Errors raised by ledger mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// A decrement would take a species below zero. Feasibility is checked
    /// before every commit, so this indicates a sequencing defect upstream.
    #[error("cannot take {requested} of species {species}: only {available} remaining")]
    Underflow {
        /// Species whose decrement failed
        species: Species,

        /// Amount the caller tried to take
        requested: u64,

        /// Amount actually remaining
        available: u64,
    },
}

/// Remaining flower counts for one size group.
///
/// Counts are fixed at load time and only ever decrease afterwards.
#[derive(Debug, Clone, Default)]
pub struct InventoryLedger {
    counts: FxHashMap<Species, u64>,
    total: u64,
}

impl InventoryLedger {
    /// Build a ledger from initial species counts. Repeated entries for the
    /// same species accumulate.
    pub fn from_counts(counts: impl IntoIterator<Item = (Species, u64)>) -> Self {
        let mut ledger = InventoryLedger::default();

        for (species, count) in counts {
            *ledger.counts.entry(species).or_insert(0) += count;
            ledger.total += count;
        }

        ledger
    }

    /// Remaining count of one species. Unknown species have zero remaining.
    pub fn remaining(&self, species: Species) -> u64 {
        self.counts.get(&species).copied().unwrap_or(0)
    }

    /// Sum of remaining counts across all species in the group.
    pub fn remaining_total(&self) -> u64 {
        self.total
    }

    /// Whether the group has any flowers left.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// All species the ledger has ever stocked, with their remaining counts,
    /// in lexicographic species order.
    pub fn species(&self) -> Vec<(Species, u64)> {
        let mut entries: Vec<(Species, u64)> =
            self.counts.iter().map(|(&s, &c)| (s, c)).collect();
        entries.sort_unstable_by_key(|&(species, _)| species);
        entries
    }

    /// Take `amount` flowers of `species` out of the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Underflow`] when `amount` exceeds the
    /// remaining count; the ledger is left untouched in that case.
    pub fn decrement(&mut self, species: Species, amount: u64) -> Result<(), LedgerError> {
        let available = self.remaining(species);

        if amount > available {
            return Err(LedgerError::Underflow {
                species,
                requested: amount,
                available,
            });
        }

        if let Some(count) = self.counts.get_mut(&species) {
            *count -= amount;
            self.total -= amount;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn species(letter: char) -> Species {
        Species::new(letter).unwrap_or_else(|_| panic!("bad test species {letter:?}"))
    }

    #[test]
    fn from_counts_accumulates_repeated_species() {
        let a = species('a');
        let ledger = InventoryLedger::from_counts([(a, 2), (a, 3)]);

        assert_eq!(ledger.remaining(a), 5);
        assert_eq!(ledger.remaining_total(), 5);
    }

    #[test]
    fn remaining_is_zero_for_unknown_species() {
        let ledger = InventoryLedger::from_counts([(species('a'), 4)]);

        assert_eq!(ledger.remaining(species('b')), 0);
    }

    #[test]
    fn decrement_reduces_species_and_total() -> TestResult {
        let (a, b) = (species('a'), species('b'));
        let mut ledger = InventoryLedger::from_counts([(a, 4), (b, 2)]);

        ledger.decrement(a, 3)?;

        assert_eq!(ledger.remaining(a), 1);
        assert_eq!(ledger.remaining(b), 2);
        assert_eq!(ledger.remaining_total(), 3);

        Ok(())
    }

    #[test]
    fn decrement_past_zero_is_an_underflow() {
        let a = species('a');
        let mut ledger = InventoryLedger::from_counts([(a, 2)]);

        let result = ledger.decrement(a, 3);

        assert_eq!(
            result,
            Err(LedgerError::Underflow {
                species: a,
                requested: 3,
                available: 2,
            })
        );

        // The failed decrement must not have touched the ledger.
        assert_eq!(ledger.remaining(a), 2);
        assert_eq!(ledger.remaining_total(), 2);
    }

    #[test]
    fn species_lists_in_lexicographic_order() {
        let ledger =
            InventoryLedger::from_counts([(species('c'), 1), (species('a'), 2), (species('b'), 3)]);

        assert_eq!(
            ledger.species(),
            vec![(species('a'), 2), (species('b'), 3), (species('c'), 1)]
        );
    }
}
