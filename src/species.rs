//! Species & Size Groups

use std::fmt;

use thiserror::Error;

/// Errors raised when interpreting species or size-group letters.
#[derive(Debug, Error, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpeciesError {
    /// Species are identified by a single lowercase ASCII letter.
    #[error("invalid species letter: {0:?}")]
    InvalidSpecies(char),

    /// Size groups are identified by `L` or `S`.
    #[error("invalid size group letter: {0:?}")]
    InvalidSizeGroup(char),
}

/// A flower species, identified by a lowercase ASCII letter.
///
/// Species have no attributes beyond identity. The derived `Ord` is the
/// lexicographic letter order used for every deterministic tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Species(char);

impl Species {
    /// Create a species from its letter.
    ///
    /// # Errors
    ///
    /// Returns [`SpeciesError::InvalidSpecies`] unless the letter is a
    /// lowercase ASCII letter.
    pub fn new(letter: char) -> Result<Self, SpeciesError> {
        if letter.is_ascii_lowercase() {
            Ok(Species(letter))
        } else {
            Err(SpeciesError::InvalidSpecies(letter))
        }
    }

    /// The letter identifying this species.
    pub fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bouquet and flower size class.
///
/// Designs and inventories are partitioned by this axis and never cross it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeGroup {
    /// Large flowers and large bouquet designs.
    Large,

    /// Small flowers and small bouquet designs.
    Small,
}

impl SizeGroup {
    /// Both size groups, in output order (large first).
    pub const ALL: [SizeGroup; 2] = [SizeGroup::Large, SizeGroup::Small];

    /// Parse a size group from its letter.
    ///
    /// # Errors
    ///
    /// Returns [`SpeciesError::InvalidSizeGroup`] unless the letter is
    /// `L` or `S`.
    pub fn from_letter(letter: char) -> Result<Self, SpeciesError> {
        match letter {
            'L' => Ok(SizeGroup::Large),
            'S' => Ok(SizeGroup::Small),
            other => Err(SpeciesError::InvalidSizeGroup(other)),
        }
    }

    /// The letter identifying this size group.
    pub fn letter(self) -> char {
        match self {
            SizeGroup::Large => 'L',
            SizeGroup::Small => 'S',
        }
    }
}

impl fmt::Display for SizeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeGroup::Large => write!(f, "large"),
            SizeGroup::Small => write!(f, "small"),
        }
    }
}
