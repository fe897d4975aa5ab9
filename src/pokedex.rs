use crate::completion::CompletionQuery;
use crate::dex_data::{bundled_tables, DexTables};
use crate::errors::{DexDataResult, DexResult, SnapshotError};
use crate::flags::{DexStorage, FlagSnapshot, FlagStore};
use crate::listing::{listing_rows, ListEntry, ListOrder};
use crate::session::CatalogSession;
use crate::species::{RegionalOrdinal, SpeciesId};
use crate::sprite::{SpriteRenderRequest, SpriteRequestBuilder};
use schema::{DexMode, FlagCase, FlagKind, Measurement};
use std::sync::Arc;

/// One game's catalog: shared content tables plus this game's flags and
/// browsing session. Independent instances never share mutable state.
///
/// The flag store is always sized from `tables`, so the query helpers here
/// skip the pairing check the free-standing constructors perform.
#[derive(Debug)]
pub struct Pokedex {
    tables: Arc<DexTables>,
    flags: FlagStore,
    session: CatalogSession,
}

impl Pokedex {
    pub fn new(tables: Arc<DexTables>) -> Self {
        let flags = FlagStore::new(tables.translator.national_count());
        Pokedex {
            tables,
            flags,
            session: CatalogSession::new(),
        }
    }

    /// A fresh catalog over the content shipped with the crate
    pub fn bundled() -> DexDataResult<Self> {
        Ok(Self::new(bundled_tables()?))
    }

    pub fn tables(&self) -> &DexTables {
        &self.tables
    }

    pub fn flags(&self) -> &FlagStore {
        &self.flags
    }

    pub fn session(&self) -> &CatalogSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut CatalogSession {
        &mut self.session
    }

    // --- Flags ---

    pub fn get_flag(&self, species: u16, kind: FlagKind) -> DexResult<bool> {
        self.flags.get_flag(species, kind)
    }

    pub fn set_flag(&mut self, species: u16, kind: FlagKind) -> DexResult<bool> {
        self.flags.set_flag(species, kind)
    }

    pub fn get_set_flag(&mut self, species: u16, case: FlagCase) -> DexResult<bool> {
        self.flags.get_set(species, case)
    }

    pub fn clear_flag(&mut self, species: u16, kind: FlagKind) -> DexResult<bool> {
        self.flags.clear_flag(species, kind)
    }

    pub fn first_seen(&self, species: u16) -> DexResult<Option<u32>> {
        self.flags.first_seen(species)
    }

    pub fn first_caught(&self, species: u16) -> DexResult<Option<u32>> {
        self.flags.first_caught(species)
    }

    // --- Numbering ---

    pub fn national_to_regional(&self, species: u16) -> DexResult<Option<RegionalOrdinal>> {
        self.tables.translator.national_to_regional(species)
    }

    pub fn regional_to_national(&self, ordinal: u16) -> DexResult<SpeciesId> {
        self.tables.translator.regional_to_national(ordinal)
    }

    // --- Queries ---

    pub fn completion(&self) -> CompletionQuery<'_> {
        CompletionQuery::paired(&self.tables, &self.flags)
    }

    pub fn count(&self, mode: DexMode, kind: FlagKind) -> usize {
        self.completion().count(mode, kind)
    }

    pub fn has_all_regional(&self) -> bool {
        self.completion().has_all_regional()
    }

    pub fn has_all_known(&self) -> bool {
        self.completion().has_all_known()
    }

    pub fn height_weight(&self, species: u16, which: Measurement) -> DexResult<u16> {
        self.tables.metadata.get_height_weight(species, which)
    }

    pub fn listing(&self, mode: DexMode, order: ListOrder) -> Vec<ListEntry> {
        listing_rows(&self.tables, &self.flags, mode, order)
    }

    // --- Sprites ---

    pub fn sprites(&self) -> SpriteRequestBuilder<'_> {
        SpriteRequestBuilder::paired(&self.tables, &self.flags)
    }

    pub fn sprite_request(
        &self,
        species: u16,
        individual_id: u32,
        personality: u32,
    ) -> DexResult<SpriteRenderRequest> {
        self.sprites().build(species, individual_id, personality)
    }

    // --- Lifecycle ---

    /// New game: clear every flag and both list cursors
    pub fn reset(&mut self) {
        self.flags.reset_all();
        self.session.reset_scroll_positions();
    }

    pub fn save_to<S: DexStorage>(&self, storage: &mut S) -> Result<(), SnapshotError> {
        let bytes = self.flags.snapshot().to_bytes()?;
        log::info!("Saving dex flags ({} bytes)", bytes.len());
        storage.store_dex_bytes(bytes);
        Ok(())
    }

    /// Replace the flags with stored state. Returns `false` and leaves the
    /// flags untouched when the save has no dex data yet.
    pub fn load_from<S: DexStorage>(&mut self, storage: &mut S) -> Result<bool, SnapshotError> {
        let Some(bytes) = storage.load_dex_bytes() else {
            log::info!("No stored dex flags; keeping current state");
            return Ok(false);
        };
        let snapshot = FlagSnapshot::from_bytes(&bytes)?;
        self.flags = FlagStore::restore(&snapshot, self.tables.translator.national_count())?;
        log::info!("Loaded dex flags ({} bytes)", bytes.len());
        Ok(true)
    }
}
