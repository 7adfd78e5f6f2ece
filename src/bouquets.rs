//! Materialized Bouquets

use std::fmt::Write;

use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    designs::{DesignCatalog, DesignKey, DesignRule},
    species::{SizeGroup, Species},
};

/// Errors raised while encoding bouquets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A bouquet references a design key missing from the catalog. Bouquets
    /// are only ever built from catalog rules, so this is a wiring defect.
    #[error("bouquet references a design missing from the catalog")]
    MissingDesign(DesignKey),
}

/// Species counts placed in one bouquet, kept in first-use order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    entries: SmallVec<[(Species, u64); 8]>,
}

impl Composition {
    /// Create an empty composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` flowers of `species`, merging with any existing entry.
    pub fn add(&mut self, species: Species, amount: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|(s, _)| *s == species) {
            entry.1 += amount;
        } else {
            self.entries.push((species, amount));
        }
    }

    /// Count of one species in the composition.
    pub fn count(&self, species: Species) -> u64 {
        self.entries
            .iter()
            .find(|&&(s, _)| s == species)
            .map_or(0, |&(_, count)| count)
    }

    /// Total number of flowers in the composition.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Number of distinct species used.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the composition uses no flowers at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-use order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, (Species, u64)>> {
        self.entries.iter().copied()
    }

    /// Entries sorted by species letter, as the code encoding requires.
    pub fn sorted(&self) -> SmallVec<[(Species, u64); 8]> {
        let mut entries = self.entries.clone();
        entries.sort_unstable_by_key(|&(species, _)| species);
        entries
    }
}

impl<'a> IntoIterator for &'a Composition {
    type Item = (Species, u64);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (Species, u64)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A concrete bouquet: the design it was allocated for plus the flowers used.
///
/// Immutable once created; the composition satisfies the design's total and
/// per-species minimums, which the allocator guarantees at commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bouquet {
    design: DesignKey,
    composition: Composition,
}

impl Bouquet {
    /// Create a bouquet for a design with the given composition.
    pub fn new(design: DesignKey, composition: Composition) -> Self {
        Self {
            design,
            composition,
        }
    }

    /// Key of the originating design rule.
    pub fn design(&self) -> DesignKey {
        self.design
    }

    /// The flowers actually used.
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Encode the bouquet as its code: the design code followed by
    /// `<count><species>` pairs in alphabetical species order, e.g. `AL10a15b`.
    pub fn code(&self, rule: &DesignRule) -> String {
        let mut code = rule.code();

        for (species, count) in self.composition.sorted() {
            let _ = write!(code, "{count}{species}");
        }

        code
    }
}

/// Ordered bouquets materialized for one size group.
///
/// Append-only: the collection grows monotonically during allocation and is
/// never reordered.
#[derive(Debug)]
pub struct BouquetCollection {
    group: SizeGroup,
    bouquets: Vec<Bouquet>,
}

impl BouquetCollection {
    /// Create an empty collection for one size group.
    pub fn new(group: SizeGroup) -> Self {
        Self {
            group,
            bouquets: Vec::new(),
        }
    }

    /// The size group this collection belongs to.
    pub fn group(&self) -> SizeGroup {
        self.group
    }

    /// Append a materialized bouquet.
    pub fn push(&mut self, bouquet: Bouquet) {
        self.bouquets.push(bouquet);
    }

    /// Number of bouquets materialized so far.
    pub fn len(&self) -> usize {
        self.bouquets.len()
    }

    /// Whether no bouquets were materialized.
    pub fn is_empty(&self) -> bool {
        self.bouquets.is_empty()
    }

    /// Bouquets in allocation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bouquet> {
        self.bouquets.iter()
    }

    /// Encode all bouquets in allocation order.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::MissingDesign`] if a bouquet references a key
    /// the catalog does not contain.
    pub fn codes(&self, catalog: &DesignCatalog) -> Result<Vec<String>, EncodeError> {
        self.bouquets
            .iter()
            .map(|bouquet| {
                let rule = catalog
                    .get(bouquet.design())
                    .ok_or(EncodeError::MissingDesign(bouquet.design()))?;

                Ok(bouquet.code(rule))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a BouquetCollection {
    type Item = &'a Bouquet;
    type IntoIter = std::slice::Iter<'a, Bouquet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
