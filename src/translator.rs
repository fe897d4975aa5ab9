//! Two-way mapping between regional ordinals and national species numbers.
//!
//! Both directions are derived from the single content list, so the two
//! views can never disagree about which species exist. The tables are
//! immutable once built.

use crate::errors::{DexDataError, DexDataResult, DexError, DexResult, Precondition};
use crate::flags::FlagStore;
use crate::species::{RegionalOrdinal, SpeciesId};
use schema::{DexData, DexMode, FlagKind};
use std::iter::Copied;
use std::ops::Range;
use std::slice;

#[derive(Debug, Clone)]
pub struct IndexTranslator {
    region: String,
    national_to_regional: Vec<Option<RegionalOrdinal>>,
    regional_to_national: Vec<SpeciesId>,
}

impl IndexTranslator {
    /// Build both lookup directions from content, rejecting gaps, unknown
    /// species and duplicates.
    pub fn from_data(data: &DexData) -> DexDataResult<Self> {
        if data.species.is_empty() {
            return Err(DexDataError::Empty);
        }
        let national_count = u16::try_from(data.species.len())
            .map_err(|_| DexDataError::TooManySpecies(data.species.len()))?;

        for (position, entry) in data.species.iter().enumerate() {
            let expected = position as u16 + 1;
            if entry.national_number != expected {
                return Err(DexDataError::NationalGap {
                    position,
                    expected,
                    found: entry.national_number,
                });
            }
        }

        let mut national_to_regional = vec![None; data.species.len()];
        let mut regional_to_national = Vec::with_capacity(data.regional_order.len());

        for (position, &raw) in data.regional_order.iter().enumerate() {
            let species = SpeciesId::new(raw, national_count).map_err(|_| {
                DexDataError::UnknownRegionalSpecies {
                    position,
                    species: raw,
                }
            })?;
            let slot = &mut national_to_regional[species.index()];
            if slot.is_some() {
                return Err(DexDataError::DuplicateRegionalSpecies(raw));
            }
            *slot = Some(RegionalOrdinal::from_index(position));
            regional_to_national.push(species);
        }

        Ok(IndexTranslator {
            region: data.region.clone(),
            national_to_regional,
            regional_to_national,
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn national_count(&self) -> u16 {
        self.national_to_regional.len() as u16
    }

    pub fn regional_count(&self) -> u16 {
        self.regional_to_national.len() as u16
    }

    /// Number of entries in the given numbering scheme
    pub fn mode_count(&self, mode: DexMode) -> u16 {
        match mode {
            DexMode::Regional => self.regional_count(),
            DexMode::National => self.national_count(),
        }
    }

    /// Validate a raw national number
    pub fn species(&self, raw: u16) -> DexResult<SpeciesId> {
        SpeciesId::new(raw, self.national_count())
    }

    /// Regional ordinal of a species, `None` when it is outside the region
    pub fn national_to_regional(&self, raw: u16) -> DexResult<Option<RegionalOrdinal>> {
        let species = self.species(raw)?;
        Ok(self.regional_of(species))
    }

    /// National species at a regional ordinal
    pub fn regional_to_national(&self, raw: u16) -> DexResult<SpeciesId> {
        let ordinal = RegionalOrdinal::new(raw, self.regional_count())?;
        Ok(self.regional_to_national[ordinal.index()])
    }

    /// `None` for species outside the region, including ids from other content
    pub fn regional_of(&self, species: SpeciesId) -> Option<RegionalOrdinal> {
        self.national_to_regional
            .get(species.index())
            .copied()
            .flatten()
    }

    /// Resolve a 1-based catalog index in either numbering scheme
    pub fn species_at(&self, mode: DexMode, ordinal: u16) -> DexResult<SpeciesId> {
        match mode {
            DexMode::Regional => self.regional_to_national(ordinal),
            DexMode::National => self.species(ordinal),
        }
    }

    /// The species' 1-based position in the given scheme, if it has one
    pub fn ordinal_in(&self, mode: DexMode, species: SpeciesId) -> Option<u16> {
        match mode {
            DexMode::Regional => self.regional_of(species).map(RegionalOrdinal::raw),
            DexMode::National => Some(species.raw()),
        }
    }

    /// Every species of a numbering scheme, in that scheme's order
    pub fn species_in(&self, mode: DexMode) -> ModeSpecies<'_> {
        match mode {
            DexMode::Regional => ModeSpecies::Regional(self.regional_to_national.iter().copied()),
            DexMode::National => ModeSpecies::National(0..self.national_to_regional.len()),
        }
    }

    /// Number of species with `kind` set, restricted to the scheme's species.
    /// Fails when `flags` was sized for different content.
    pub fn count(&self, flags: &FlagStore, mode: DexMode, kind: FlagKind) -> DexResult<usize> {
        if flags.national_count() != self.national_count() {
            return Err(DexError::PreconditionViolation(Precondition::TableMismatch {
                flags: flags.national_count(),
                tables: self.national_count(),
            }));
        }
        Ok(self.count_set(flags, mode, kind))
    }

    pub(crate) fn count_set(&self, flags: &FlagStore, mode: DexMode, kind: FlagKind) -> usize {
        self.species_in(mode)
            .filter(|&species| flags.is_set(species, kind))
            .count()
    }
}

/// Species of one numbering scheme, see [`IndexTranslator::species_in`]
#[derive(Debug, Clone)]
pub enum ModeSpecies<'a> {
    Regional(Copied<slice::Iter<'a, SpeciesId>>),
    National(Range<usize>),
}

impl Iterator for ModeSpecies<'_> {
    type Item = SpeciesId;

    fn next(&mut self) -> Option<SpeciesId> {
        match self {
            ModeSpecies::Regional(ids) => ids.next(),
            ModeSpecies::National(indices) => indices.next().map(SpeciesId::from_index),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            ModeSpecies::Regional(ids) => ids.size_hint(),
            ModeSpecies::National(indices) => indices.size_hint(),
        }
    }
}

impl ExactSizeIterator for ModeSpecies<'_> {}
