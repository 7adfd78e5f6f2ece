//! Input Grammar Parsing

use std::num::ParseIntError;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    designs::{DesignCatalog, DesignError, DesignRule},
    ledger::InventoryLedger,
    species::{SizeGroup, Species, SpeciesError},
};

/// Errors raised while parsing the textual input description.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A design line did not match `<ID><SIZE>(<count><species>)+<total>`.
    #[error("malformed design line: {0:?}")]
    MalformedDesign(String),

    /// A design line ended without its trailing total flower count.
    #[error("design line is missing its total flower count: {0:?}")]
    MissingTotal(String),

    /// A flower line did not match `<species><SIZE>`.
    #[error("malformed flower line: {0:?}")]
    MalformedFlower(String),

    /// Wrapped species or size-group letter error.
    #[error(transparent)]
    Species(#[from] SpeciesError),

    /// Wrapped design validation error.
    #[error(transparent)]
    Design(#[from] DesignError),

    /// A count did not fit the supported integer range.
    #[error("count out of range in {text:?}")]
    CountOutOfRange {
        /// Line the count appeared on
        text: String,

        /// Underlying integer parse error
        #[source]
        source: ParseIntError,
    },
}

/// Parsed designs and per-group inventories, ready for allocation.
#[derive(Debug)]
pub struct ParsedInput {
    /// All design rules, registered in declaration order.
    pub catalog: DesignCatalog,

    /// Large-flower inventory.
    pub large: InventoryLedger,

    /// Small-flower inventory.
    pub small: InventoryLedger,
}

impl ParsedInput {
    /// Whether the input carried no designs and no flowers at all.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty() && self.large.is_empty() && self.small.is_empty()
    }
}

/// Parse a full input description.
///
/// The input is a block of design lines, a blank line, and a block of flower
/// lines; a second blank line (or the end of input) terminates the
/// description. Leading and trailing whitespace per line is ignored.
///
/// # Errors
///
/// Returns a [`ParseError`] for any line that does not match the grammar.
pub fn parse_input(text: &str) -> Result<ParsedInput, ParseError> {
    let mut catalog = DesignCatalog::new();
    let mut large: FxHashMap<Species, u64> = FxHashMap::default();
    let mut small: FxHashMap<Species, u64> = FxHashMap::default();

    let mut in_designs = true;

    for raw in text.lines() {
        let line = raw.trim();

        if line.is_empty() {
            if in_designs {
                in_designs = false;
                continue;
            }

            break;
        }

        if in_designs {
            catalog.insert(parse_design(line)?);
        } else {
            let (species, group) = parse_flower(line)?;
            let counts = match group {
                SizeGroup::Large => &mut large,
                SizeGroup::Small => &mut small,
            };

            *counts.entry(species).or_insert(0) += 1;
        }
    }

    Ok(ParsedInput {
        catalog,
        large: InventoryLedger::from_counts(large),
        small: InventoryLedger::from_counts(small),
    })
}

/// Parse one design line, e.g. `AL8d10r5t30`: design letter, size letter,
/// `<count><species>` pairs, trailing total.
///
/// # Errors
///
/// Returns a [`ParseError`] if the line does not match the design grammar or
/// the resulting rule fails validation.
pub fn parse_design(line: &str) -> Result<DesignRule, ParseError> {
    let mut chars = line.chars();

    let id = chars
        .next()
        .filter(char::is_ascii_uppercase)
        .ok_or_else(|| ParseError::MalformedDesign(line.to_string()))?;

    let group_letter = chars
        .next()
        .ok_or_else(|| ParseError::MalformedDesign(line.to_string()))?;
    let group = SizeGroup::from_letter(group_letter)?;

    let mut minimums: Vec<(Species, u64)> = Vec::new();
    let mut total = None;
    let mut rest = chars.peekable();

    while rest.peek().is_some() {
        let mut digits = String::new();

        while let Some(&c) = rest.peek() {
            if !c.is_ascii_digit() {
                break;
            }

            digits.push(c);
            rest.next();
        }

        if digits.is_empty() {
            return Err(ParseError::MalformedDesign(line.to_string()));
        }

        let count: u64 = digits
            .parse()
            .map_err(|source| ParseError::CountOutOfRange {
                text: line.to_string(),
                source,
            })?;

        match rest.peek() {
            Some(&letter) if letter.is_ascii_lowercase() => {
                rest.next();
                minimums.push((Species::new(letter)?, count));
            }
            Some(_) => return Err(ParseError::MalformedDesign(line.to_string())),
            None => total = Some(count),
        }
    }

    let total = total.ok_or_else(|| ParseError::MissingTotal(line.to_string()))?;

    Ok(DesignRule::new(id, group, total, minimums)?)
}

/// Parse one flower line, e.g. `aL`: species letter then size letter.
fn parse_flower(line: &str) -> Result<(Species, SizeGroup), ParseError> {
    let mut chars = line.chars();

    let (Some(species_letter), Some(group_letter), None) =
        (chars.next(), chars.next(), chars.next())
    else {
        return Err(ParseError::MalformedFlower(line.to_string()));
    };

    Ok((
        Species::new(species_letter)?,
        SizeGroup::from_letter(group_letter)?,
    ))
}
