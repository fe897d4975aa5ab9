use crate::errors::{DexError, DexResult, IndexKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A national species number that has been checked against the loaded
/// content. Only constructible through [`SpeciesId::new`], so every table
/// indexed by it stays in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpeciesId(u16);

/// A 1-based position inside the regional numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionalOrdinal(u16);

impl SpeciesId {
    /// Validate a raw national number against a national species count
    pub fn new(raw: u16, national_count: u16) -> DexResult<Self> {
        check_range(raw, national_count, IndexKind::Species).map(SpeciesId)
    }

    pub fn raw(self) -> u16 {
        self.0
    }

    /// Zero-based slot in per-species tables
    pub(crate) fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    pub(crate) fn from_index(index: usize) -> Self {
        SpeciesId(index as u16 + 1)
    }
}

impl RegionalOrdinal {
    /// Validate a raw regional ordinal against the regional species count
    pub fn new(raw: u16, regional_count: u16) -> DexResult<Self> {
        check_range(raw, regional_count, IndexKind::RegionalOrdinal).map(RegionalOrdinal)
    }

    pub fn raw(self) -> u16 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    pub(crate) fn from_index(index: usize) -> Self {
        RegionalOrdinal(index as u16 + 1)
    }
}

fn check_range(raw: u16, max: u16, kind: IndexKind) -> DexResult<u16> {
    if raw == 0 {
        return Err(DexError::InvalidSentinel(kind));
    }
    if raw > max {
        return Err(DexError::OutOfRange {
            kind,
            value: u32::from(raw),
            max,
        });
    }
    Ok(raw)
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03}", self.0)
    }
}

impl fmt::Display for RegionalOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}
