//! Seen/caught flag storage.
//!
//! One entry per national species in each of two parallel tables, plus the
//! chronological ordinal recorded the first time each flag goes 0 -> 1.
//! Caught always implies seen: setting caught also sets seen, and clearing
//! seen also clears caught.

pub mod snapshot;

pub use snapshot::{DexStorage, FlagSnapshot};

use crate::errors::DexResult;
use crate::species::SpeciesId;
use schema::{FlagCase, FlagKind};

const FIRST_ORDINAL: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagStore {
    seen: Vec<bool>,
    caught: Vec<bool>,
    first_seen: Vec<Option<u32>>,
    first_caught: Vec<Option<u32>>,
    next_ordinal: u32,
}

impl FlagStore {
    /// A fresh store with every flag cleared
    pub fn new(national_count: u16) -> Self {
        let len = usize::from(national_count);
        FlagStore {
            seen: vec![false; len],
            caught: vec![false; len],
            first_seen: vec![None; len],
            first_caught: vec![None; len],
            next_ordinal: FIRST_ORDINAL,
        }
    }

    pub fn national_count(&self) -> u16 {
        self.seen.len() as u16
    }

    fn validate(&self, raw: u16) -> DexResult<SpeciesId> {
        SpeciesId::new(raw, self.national_count())
    }

    /// Current value of a flag
    pub fn get_flag(&self, raw: u16, kind: FlagKind) -> DexResult<bool> {
        let species = self.validate(raw)?;
        Ok(self.is_set(species, kind))
    }

    /// Set a flag and report whether it was already set.
    ///
    /// The first 0 -> 1 transition stamps the next chronological ordinal.
    /// Catching an unseen species marks it seen first.
    pub fn set_flag(&mut self, raw: u16, kind: FlagKind) -> DexResult<bool> {
        let species = self.validate(raw)?;
        Ok(self.mark(species, kind))
    }

    /// Combined entry point keyed by an explicit case selector. Get cases
    /// return the current value, set cases the value before the call.
    pub fn get_set(&mut self, raw: u16, case: FlagCase) -> DexResult<bool> {
        if case.is_set() {
            self.set_flag(raw, case.kind())
        } else {
            self.get_flag(raw, case.kind())
        }
    }

    /// Clear a flag and report whether it was set. Used by debug tools;
    /// first-seen/first-caught ordinals are left untouched.
    pub fn clear_flag(&mut self, raw: u16, kind: FlagKind) -> DexResult<bool> {
        let species = self.validate(raw)?;
        let i = species.index();
        let previous = self.is_set(species, kind);
        match kind {
            FlagKind::Seen => {
                self.seen[i] = false;
                self.caught[i] = false;
            }
            FlagKind::Caught => self.caught[i] = false,
        }
        if previous {
            log::debug!("Cleared {} flag for species {}", kind, species);
        }
        Ok(previous)
    }

    /// Ordinal of the first time the species was seen
    pub fn first_seen(&self, raw: u16) -> DexResult<Option<u32>> {
        let species = self.validate(raw)?;
        Ok(self.first_ordinal(species, FlagKind::Seen))
    }

    /// Ordinal of the first time the species was caught
    pub fn first_caught(&self, raw: u16) -> DexResult<Option<u32>> {
        let species = self.validate(raw)?;
        Ok(self.first_ordinal(species, FlagKind::Caught))
    }

    /// Zero every flag, ordinal and the chronological counter
    pub fn reset_all(&mut self) {
        self.seen.fill(false);
        self.caught.fill(false);
        self.first_seen.fill(None);
        self.first_caught.fill(None);
        self.next_ordinal = FIRST_ORDINAL;
        log::info!("Reset all dex flags ({} species)", self.seen.len());
    }

    // Unchecked reads for ids already validated against this store's count.
    pub(crate) fn is_set(&self, species: SpeciesId, kind: FlagKind) -> bool {
        match kind {
            FlagKind::Seen => self.seen[species.index()],
            FlagKind::Caught => self.caught[species.index()],
        }
    }

    pub(crate) fn first_ordinal(&self, species: SpeciesId, kind: FlagKind) -> Option<u32> {
        match kind {
            FlagKind::Seen => self.first_seen[species.index()],
            FlagKind::Caught => self.first_caught[species.index()],
        }
    }

    /// Ordinal the next first-time transition will receive
    pub fn next_ordinal(&self) -> u32 {
        self.next_ordinal
    }

    fn mark(&mut self, species: SpeciesId, kind: FlagKind) -> bool {
        if kind == FlagKind::Caught {
            self.mark(species, FlagKind::Seen);
        }

        let i = species.index();
        let (bits, firsts) = match kind {
            FlagKind::Seen => (&mut self.seen, &mut self.first_seen),
            FlagKind::Caught => (&mut self.caught, &mut self.first_caught),
        };

        let previous = bits[i];
        bits[i] = true;
        if !previous && firsts[i].is_none() {
            firsts[i] = Some(self.next_ordinal);
            log::debug!(
                "Species {} first {} (ordinal {})",
                species,
                kind,
                self.next_ordinal
            );
            self.next_ordinal = self.next_ordinal.saturating_add(1);
        }
        previous
    }
}
