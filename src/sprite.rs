//! Parameters handed to the external sprite system when the catalog draws
//! an individual. No pixel data is decoded or cached here.

use crate::dex_data::DexTables;
use crate::errors::{DexError, DexResult, Precondition};
use crate::flags::FlagStore;
use crate::species::SpeciesId;
use schema::{DexMode, FlagKind};
use serde::{Deserialize, Serialize};

const SHINY_THRESHOLD: u32 = 8;

/// Visual variant selected by the individual's id and personality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisualVariant {
    pub shiny: bool,
    /// Personality-selected form, 0 for species with a single form
    pub form: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteRenderRequest {
    pub species: SpeciesId,
    pub individual_id: u32,
    pub personality: u32,
    pub variant: VisualVariant,
}

/// Where the sprite system should place the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpritePlacement {
    pub x: i16,
    pub y: i16,
    pub palette_slot: u16,
}

/// The graphics side: turns a request into something it can display.
pub trait SpriteSystem {
    type Handle;

    fn create_sprite(
        &mut self,
        request: &SpriteRenderRequest,
        placement: SpritePlacement,
    ) -> Option<Self::Handle>;
}

/// True when the id and personality halves XOR below the shiny threshold
pub fn is_shiny(individual_id: u32, personality: u32) -> bool {
    let id_mix = (individual_id >> 16) ^ (individual_id & 0xFFFF);
    let personality_mix = (personality >> 16) ^ (personality & 0xFFFF);
    (id_mix ^ personality_mix) < SHINY_THRESHOLD
}

/// Gathers the low two bits of each personality byte into one value and
/// reduces it to a form index.
pub fn personality_form(personality: u32, form_count: u8) -> u8 {
    if form_count == 0 {
        return 0;
    }
    let letter = ((personality & 0x0300_0000) >> 18)
        | ((personality & 0x0003_0000) >> 12)
        | ((personality & 0x0000_0300) >> 6)
        | (personality & 0x0000_0003);
    (letter % u32::from(form_count)) as u8
}

pub struct SpriteRequestBuilder<'a> {
    tables: &'a DexTables,
    flags: &'a FlagStore,
}

impl<'a> SpriteRequestBuilder<'a> {
    /// Fails when `flags` was sized for different content
    pub fn new(tables: &'a DexTables, flags: &'a FlagStore) -> DexResult<Self> {
        tables.check_flags(flags)?;
        Ok(Self::paired(tables, flags))
    }

    pub(crate) fn paired(tables: &'a DexTables, flags: &'a FlagStore) -> Self {
        SpriteRequestBuilder { tables, flags }
    }

    /// Build a request for a national species. Fails for invalid numbers and
    /// for species the player has never seen.
    pub fn build(&self, raw: u16, individual_id: u32, personality: u32) -> DexResult<SpriteRenderRequest> {
        let species = self.tables.translator.species(raw)?;
        self.build_for(species, individual_id, personality)
    }

    /// Build a request for the entry at a catalog index of either scheme
    pub fn build_for_ordinal(
        &self,
        mode: DexMode,
        ordinal: u16,
        individual_id: u32,
        personality: u32,
    ) -> DexResult<SpriteRenderRequest> {
        let species = self.tables.translator.species_at(mode, ordinal)?;
        self.build_for(species, individual_id, personality)
    }

    /// The generic catalog picture of a species: no particular individual
    pub fn build_catalog_default(&self, raw: u16) -> DexResult<SpriteRenderRequest> {
        self.build(raw, 0, 0)
    }

    fn build_for(
        &self,
        species: SpeciesId,
        individual_id: u32,
        personality: u32,
    ) -> DexResult<SpriteRenderRequest> {
        if !self.flags.is_set(species, FlagKind::Seen) {
            return Err(DexError::PreconditionViolation(Precondition::NeverSeen(
                species.raw(),
            )));
        }

        let forms = self.tables.metadata.info(species).personality_forms;
        Ok(SpriteRenderRequest {
            species,
            individual_id,
            personality,
            variant: VisualVariant {
                shiny: is_shiny(individual_id, personality),
                form: personality_form(personality, forms),
            },
        })
    }
}

/// Build a request and pass it straight to the sprite system
pub fn create_catalog_sprite<S: SpriteSystem>(
    builder: &SpriteRequestBuilder<'_>,
    sprites: &mut S,
    raw: u16,
    placement: SpritePlacement,
) -> DexResult<Option<S::Handle>> {
    let request = builder.build_catalog_default(raw)?;
    Ok(sprites.create_sprite(&request, placement))
}
