//! Allocators for Bouquet Designs

use thiserror::Error;

use crate::{
    bouquets::BouquetCollection,
    designs::DesignCatalog,
    ledger::{InventoryLedger, LedgerError},
    species::SizeGroup,
};

pub mod greedy;

/// Allocation errors.
///
/// Infeasibility of individual designs is not represented here: an
/// infeasible design simply drops out of the round's candidate set, and an
/// empty candidate set ends the group normally.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// A committed composition exceeded ledger availability. Every commit is
    /// preceded by a feasibility check, so this indicates a defect in cost
    /// evaluation rather than malformed input.
    #[error("committing design {design}: {source}")]
    Underflow {
        /// Code of the design whose commit failed
        design: String,

        /// Underlying ledger underflow
        #[source]
        source: LedgerError,
    },
}

/// Trait for turning design rules plus a ledger into materialized bouquets.
pub trait Allocator {
    /// Allocate bouquets for one size group until no design is feasible.
    ///
    /// The allocator owns the ledger mutation for the duration of the run;
    /// each commit is fully applied before the next round reads the counts.
    ///
    /// # Errors
    ///
    /// Returns an [`AllocationError`] if a commit violates a ledger
    /// invariant.
    fn allocate(
        catalog: &DesignCatalog,
        group: SizeGroup,
        ledger: &mut InventoryLedger,
    ) -> Result<BouquetCollection, AllocationError>;
}
