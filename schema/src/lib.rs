// Pokedex Schema - Shared content definitions
// This crate contains the serde types for the bundled game content asset and
// the small closed enums shared between the content and the catalog engine.

// Re-export the main types
pub use dex_types::*;
pub use species_data::*;

pub mod dex_types;
pub mod species_data;
