//! Fixtures
//!
//! Named YAML scenario sets (design strings plus per-group flower counts)
//! used by the integration tests.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    designs::DesignCatalog,
    ledger::InventoryLedger,
    parser::{self, ParseError},
    species::{SizeGroup, Species, SpeciesError},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Design string parsing error
    #[error(transparent)]
    Design(#[from] ParseError),

    /// Wrapped species letter error
    #[error(transparent)]
    Species(#[from] SpeciesError),

    /// Flower keys must be single letters
    #[error("invalid species key: {0:?}")]
    InvalidSpecies(String),
}

/// Raw scenario file shape.
#[derive(Debug, Deserialize)]
struct ScenarioFile {
    /// Design strings in the input grammar, e.g. `AL2a1b4`
    #[serde(default)]
    designs: Vec<String>,

    /// Flower counts per size group
    #[serde(default)]
    flowers: FlowerSection,
}

#[derive(Debug, Default, Deserialize)]
struct FlowerSection {
    #[serde(default)]
    large: FxHashMap<String, u64>,

    #[serde(default)]
    small: FxHashMap<String, u64>,
}

/// A loaded scenario: a design catalog plus the initial inventory of each
/// size group.
#[derive(Debug)]
pub struct Fixture {
    /// Design rules in file order.
    pub catalog: DesignCatalog,

    large: InventoryLedger,
    small: InventoryLedger,
}

impl Fixture {
    /// Load a named scenario from `./fixtures/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or any design
    /// or species entry is invalid.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let file_path = PathBuf::from("./fixtures").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        Self::from_yaml(&contents)
    }

    /// A fresh copy of the initial ledger for one size group.
    ///
    /// Each call returns an independent clone so tests can run the same
    /// scenario repeatedly.
    pub fn ledger(&self, group: SizeGroup) -> InventoryLedger {
        match group {
            SizeGroup::Large => self.large.clone(),
            SizeGroup::Small => self.small.clone(),
        }
    }

    fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let file: ScenarioFile = serde_norway::from_str(contents)?;

        let mut catalog = DesignCatalog::new();
        for design in &file.designs {
            catalog.insert(parser::parse_design(design)?);
        }

        Ok(Fixture {
            catalog,
            large: ledger_from_keys(file.flowers.large)?,
            small: ledger_from_keys(file.flowers.small)?,
        })
    }
}

fn ledger_from_keys(counts: FxHashMap<String, u64>) -> Result<InventoryLedger, FixtureError> {
    let mut converted: Vec<(Species, u64)> = Vec::with_capacity(counts.len());

    for (key, count) in counts {
        let mut chars = key.chars();

        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(FixtureError::InvalidSpecies(key));
        };

        converted.push((Species::new(letter)?, count));
    }

    Ok(InventoryLedger::from_counts(converted))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn species(letter: char) -> Species {
        Species::new(letter).unwrap_or_else(|_| panic!("bad test species {letter:?}"))
    }

    #[test]
    fn from_yaml_loads_designs_and_flowers() -> TestResult {
        let contents = "designs:\n  - AL2a4\nflowers:\n  large: { a: 5, b: 2 }\n  small: { x: 1 }\n";

        let fixture = Fixture::from_yaml(contents)?;

        assert_eq!(fixture.catalog.len(), 1);
        assert_eq!(fixture.ledger(SizeGroup::Large).remaining(species('a')), 5);
        assert_eq!(fixture.ledger(SizeGroup::Small).remaining(species('x')), 1);

        Ok(())
    }

    #[test]
    fn ledger_returns_a_fresh_copy_each_call() -> TestResult {
        let contents = "flowers:\n  large: { a: 3 }\n";

        let fixture = Fixture::from_yaml(contents)?;

        let mut first = fixture.ledger(SizeGroup::Large);
        first.decrement(species('a'), 3)?;

        let second = fixture.ledger(SizeGroup::Large);

        assert_eq!(second.remaining(species('a')), 3);

        Ok(())
    }

    #[test]
    fn invalid_species_keys_are_rejected() {
        let contents = "flowers:\n  large: { ab: 1 }\n";

        assert!(matches!(
            Fixture::from_yaml(contents),
            Err(FixtureError::InvalidSpecies(_))
        ));
    }
}
