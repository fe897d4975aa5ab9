// In: src/lib.rs

//! Pokedex Catalog Core
//!
//! Seen/caught flag storage, regional/national index translation, completion
//! queries, catalog session state and sprite request construction for a
//! creature-collection game. Presentation, pixel decoding and save-file
//! layout belong to the surrounding application.

// --- MODULE DECLARATIONS ---
pub mod completion;
pub mod dex_data;
pub mod errors;
pub mod flags;
pub mod listing;
pub mod metadata;
pub mod pokedex;
pub mod session;
pub mod species;
pub mod sprite;
pub mod translator;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Content definitions and the shared selector enums.
pub use schema::{DexData, DexMode, FlagCase, FlagKind, Measurement, SpeciesEntry};

// --- From this crate's modules (`src/`) ---

// The per-game context object.
pub use pokedex::Pokedex;

// Components.
pub use completion::{CompletionQuery, CompletionSummary};
pub use dex_data::{bundled_tables, load_dex_data, load_dex_tables, parse_dex_data, DexTables};
pub use flags::{DexStorage, FlagSnapshot, FlagStore};
pub use listing::{build_listing, ListEntry, ListOrder};
pub use metadata::{SpeciesInfo, SpeciesMetadata};
pub use session::{CatalogClosedHook, CatalogSession, ScrollPosition, SessionState};
pub use species::{RegionalOrdinal, SpeciesId};
pub use sprite::{
    create_catalog_sprite, SpritePlacement, SpriteRenderRequest, SpriteRequestBuilder,
    SpriteSystem, VisualVariant,
};
pub use translator::{IndexTranslator, ModeSpecies};

// Crate-specific error and result types.
pub use errors::{
    DexDataError, DexDataResult, DexError, DexResult, IndexKind, Precondition, SnapshotError,
};
