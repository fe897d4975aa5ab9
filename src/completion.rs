use crate::dex_data::DexTables;
use crate::errors::DexResult;
use crate::flags::FlagStore;
use crate::species::SpeciesId;
use schema::{DexMode, FlagKind};
use serde::{Deserialize, Serialize};

/// Seen/caught totals for one numbering scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSummary {
    pub mode: DexMode,
    pub seen: usize,
    pub caught: usize,
    pub total: usize,
}

/// Read-only aggregate queries over the flag tables.
///
/// Everything is computed on demand from the current bits, so results can
/// never lag behind a mutation. Species marked as completion-exempt in
/// content (event-only species) do not block completion.
pub struct CompletionQuery<'a> {
    tables: &'a DexTables,
    flags: &'a FlagStore,
}

impl<'a> CompletionQuery<'a> {
    /// Fails when `flags` was sized for different content
    pub fn new(tables: &'a DexTables, flags: &'a FlagStore) -> DexResult<Self> {
        tables.check_flags(flags)?;
        Ok(Self::paired(tables, flags))
    }

    /// For callers that built `flags` from `tables` themselves
    pub(crate) fn paired(tables: &'a DexTables, flags: &'a FlagStore) -> Self {
        CompletionQuery { tables, flags }
    }

    /// Every non-exempt species with a regional ordinal has been caught
    pub fn has_all_regional(&self) -> bool {
        self.all_caught(DexMode::Regional)
    }

    /// Every non-exempt species in the national list has been caught
    pub fn has_all_known(&self) -> bool {
        self.all_caught(DexMode::National)
    }

    pub fn count(&self, mode: DexMode, kind: FlagKind) -> usize {
        self.tables.translator.count_set(self.flags, mode, kind)
    }

    pub fn summary(&self, mode: DexMode) -> CompletionSummary {
        CompletionSummary {
            mode,
            seen: self.count(mode, FlagKind::Seen),
            caught: self.count(mode, FlagKind::Caught),
            total: usize::from(self.tables.translator.mode_count(mode)),
        }
    }

    /// Species still blocking completion of a scheme, in that scheme's order
    pub fn missing(&self, mode: DexMode) -> Vec<SpeciesId> {
        self.required(mode)
            .filter(|&species| !self.flags.is_set(species, FlagKind::Caught))
            .collect()
    }

    fn all_caught(&self, mode: DexMode) -> bool {
        self.required(mode)
            .all(|species| self.flags.is_set(species, FlagKind::Caught))
    }

    fn required(&self, mode: DexMode) -> impl Iterator<Item = SpeciesId> + '_ {
        let metadata = &self.tables.metadata;
        self.tables
            .translator
            .species_in(mode)
            .filter(move |&species| !metadata.info(species).completion_exempt)
    }
}
