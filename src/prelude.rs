//! Posy prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    allocators::{AllocationError, Allocator, greedy::GreedyAllocator},
    bouquets::{Bouquet, BouquetCollection, Composition, EncodeError},
    cost::{DesignEstimate, estimate, marginal_cost},
    designs::{DesignCatalog, DesignError, DesignKey, DesignRule},
    fixtures::{Fixture, FixtureError},
    ledger::{InventoryLedger, LedgerError},
    parser::{ParseError, ParsedInput, parse_design, parse_input},
    report::{ReportError, write_summaries, write_summary},
    species::{SizeGroup, Species, SpeciesError},
};
