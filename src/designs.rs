//! Bouquet Designs

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use thiserror::Error;

use crate::species::{SizeGroup, Species};

new_key_type! {
    /// Design Key
    pub struct DesignKey;
}

/// Errors raised when constructing a design rule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DesignError {
    /// A design needs at least one flower.
    #[error("design {id}: total flower count must be positive")]
    ZeroTotal {
        /// Design identifier letter
        id: char,
    },

    /// Every listed species must require at least one flower.
    #[error("design {id}: species {species} has a zero minimum")]
    ZeroMinimum {
        /// Design identifier letter
        id: char,

        /// Offending species
        species: Species,
    },

    /// Each species may be listed at most once per design.
    #[error("design {id}: species {species} listed more than once")]
    DuplicateSpecies {
        /// Design identifier letter
        id: char,

        /// Offending species
        species: Species,
    },

    /// The required minimums must fit within the total flower count.
    #[error("design {id}: required minimums sum to {required}, more than the total of {total}")]
    MinimumsExceedTotal {
        /// Design identifier letter
        id: char,

        /// Sum of the per-species minimums
        required: u64,

        /// Total flower count of the design
        total: u64,
    },
}

/// One bouquet design: a size class, a total flower count and the minimum
/// number of flowers required per species.
///
/// Species not listed may fill the remaining slots. Rules are immutable once
/// constructed; the minimums keep their declaration order, which the cost
/// simulation depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignRule {
    id: char,
    group: SizeGroup,
    total: u64,
    minimums: SmallVec<[(Species, u64); 4]>,
}

impl DesignRule {
    /// Create a validated design rule.
    ///
    /// # Errors
    ///
    /// - [`DesignError::ZeroTotal`]: the total flower count is zero.
    /// - [`DesignError::ZeroMinimum`]: a listed species requires zero flowers.
    /// - [`DesignError::DuplicateSpecies`]: a species is listed twice.
    /// - [`DesignError::MinimumsExceedTotal`]: the minimums do not fit the total.
    pub fn new(
        id: char,
        group: SizeGroup,
        total: u64,
        minimums: impl IntoIterator<Item = (Species, u64)>,
    ) -> Result<Self, DesignError> {
        let minimums: SmallVec<[(Species, u64); 4]> = minimums.into_iter().collect();

        if total == 0 {
            return Err(DesignError::ZeroTotal { id });
        }

        for (position, &(species, minimum)) in minimums.iter().enumerate() {
            if minimum == 0 {
                return Err(DesignError::ZeroMinimum { id, species });
            }

            let repeated = minimums
                .iter()
                .take(position)
                .any(|&(earlier, _)| earlier == species);

            if repeated {
                return Err(DesignError::DuplicateSpecies { id, species });
            }
        }

        let required: u64 = minimums.iter().map(|&(_, minimum)| minimum).sum();

        if required > total {
            return Err(DesignError::MinimumsExceedTotal {
                id,
                required,
                total,
            });
        }

        Ok(DesignRule {
            id,
            group,
            total,
            minimums,
        })
    }

    /// The design identifier letter.
    pub fn id(&self) -> char {
        self.id
    }

    /// The size group this design belongs to.
    pub fn group(&self) -> SizeGroup {
        self.group
    }

    /// Total number of flowers in one bouquet of this design.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Required per-species minimums, in declaration order.
    pub fn minimums(&self) -> impl Iterator<Item = (Species, u64)> + '_ {
        self.minimums.iter().copied()
    }

    /// Number of slots not claimed by a required minimum.
    pub fn free_slots(&self) -> u64 {
        let required: u64 = self.minimums.iter().map(|&(_, minimum)| minimum).sum();
        self.total - required
    }

    /// The two-letter design code, e.g. `AL` for design `A` in the large group.
    pub fn code(&self) -> String {
        format!("{}{}", self.id, self.group.letter())
    }
}

/// Declaration-ordered registry of design rules.
///
/// Rules are keyed by [`DesignKey`] and iterated per size group in the order
/// they were inserted, which fixes the tie-break between equal-cost designs.
#[derive(Debug, Default)]
pub struct DesignCatalog {
    rules: SlotMap<DesignKey, DesignRule>,
    order: Vec<DesignKey>,
}

impl DesignCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a design rule, returning its key.
    pub fn insert(&mut self, rule: DesignRule) -> DesignKey {
        let key = self.rules.insert(rule);
        self.order.push(key);
        key
    }

    /// Look up a rule by key.
    pub fn get(&self, key: DesignKey) -> Option<&DesignRule> {
        self.rules.get(key)
    }

    /// Number of registered rules across both groups.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalog has no rules.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Rules belonging to one size group, in declaration order.
    pub fn group(&self, group: SizeGroup) -> impl Iterator<Item = (DesignKey, &DesignRule)> {
        self.order.iter().filter_map(move |&key| {
            self.rules
                .get(key)
                .filter(|rule| rule.group() == group)
                .map(|rule| (key, rule))
        })
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
    fn new_keeps_declaration_order() -> TestResult {
        let rule = DesignRule::new(
            'A',
            SizeGroup::Large,
            10,
            [(species('c'), 2), (species('a'), 3)],
        )?;

        let minimums: Vec<(Species, u64)> = rule.minimums().collect();

        assert_eq!(minimums, vec![(species('c'), 2), (species('a'), 3)]);
        assert_eq!(rule.free_slots(), 5);
        assert_eq!(rule.code(), "AL");

        Ok(())
    }

    #[test]
    fn new_rejects_zero_total() {
        let result = DesignRule::new('A', SizeGroup::Small, 0, []);

        assert_eq!(result, Err(DesignError::ZeroTotal { id: 'A' }));
    }

    #[test]
    fn new_rejects_zero_minimum() {
        let result = DesignRule::new('B', SizeGroup::Large, 5, [(species('a'), 0)]);

        assert_eq!(
            result,
            Err(DesignError::ZeroMinimum {
                id: 'B',
                species: species('a'),
            })
        );
    }

    #[test]
    fn new_rejects_duplicate_species() {
        let result = DesignRule::new(
            'C',
            SizeGroup::Large,
            5,
            [(species('a'), 1), (species('a'), 2)],
        );

        assert_eq!(
            result,
            Err(DesignError::DuplicateSpecies {
                id: 'C',
                species: species('a'),
            })
        );
    }

    #[test]
    fn new_rejects_minimums_beyond_total() {
        let result = DesignRule::new(
            'D',
            SizeGroup::Small,
            3,
            [(species('a'), 2), (species('b'), 2)],
        );

        assert_eq!(
            result,
            Err(DesignError::MinimumsExceedTotal {
                id: 'D',
                required: 4,
                total: 3,
            })
        );
    }

    #[test]
    fn catalog_groups_preserve_declaration_order() -> TestResult {
        let mut catalog = DesignCatalog::new();

        let large_b = catalog.insert(DesignRule::new('B', SizeGroup::Large, 3, [])?);
        let small_c = catalog.insert(DesignRule::new('C', SizeGroup::Small, 2, [])?);
        let large_a = catalog.insert(DesignRule::new('A', SizeGroup::Large, 4, [])?);

        let large_keys: Vec<DesignKey> = catalog
            .group(SizeGroup::Large)
            .map(|(key, _)| key)
            .collect();
        let small_keys: Vec<DesignKey> = catalog
            .group(SizeGroup::Small)
            .map(|(key, _)| key)
            .collect();

        assert_eq!(large_keys, vec![large_b, large_a]);
        assert_eq!(small_keys, vec![small_c]);
        assert_eq!(catalog.len(), 3);

        Ok(())
    }
}
