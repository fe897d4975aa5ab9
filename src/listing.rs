use crate::dex_data::DexTables;
use crate::errors::DexResult;
use crate::flags::FlagStore;
use crate::species::SpeciesId;
use schema::{DexMode, FlagKind, Measurement};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use strum::{Display, EnumIter};

/// Orders the catalog list can be shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum ListOrder {
    Numerical,
    Alphabetical,
    Heaviest,
    Lightest,
    Tallest,
    Smallest,
    FirstSeen,
    FirstCaught,
}

/// One row of the catalog list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    /// Position in the browsed scheme, `None` for species outside it
    pub ordinal: Option<u16>,
    pub species: SpeciesId,
    pub seen: bool,
    pub caught: bool,
}

/// Build the rows shown for `mode` in the given order.
///
/// Numerical lists every index up to the last seen one. Alphabetical needs
/// the species seen, the size orders need it caught, and the discovery
/// orders need the matching first-time ordinal. Fails when `flags` was
/// sized for different content.
pub fn build_listing(
    tables: &DexTables,
    flags: &FlagStore,
    mode: DexMode,
    order: ListOrder,
) -> DexResult<Vec<ListEntry>> {
    tables.check_flags(flags)?;
    Ok(listing_rows(tables, flags, mode, order))
}

pub(crate) fn listing_rows(
    tables: &DexTables,
    flags: &FlagStore,
    mode: DexMode,
    order: ListOrder,
) -> Vec<ListEntry> {
    let translator = &tables.translator;
    let metadata = &tables.metadata;
    let entry = |species: SpeciesId| ListEntry {
        ordinal: translator.ordinal_in(mode, species),
        species,
        seen: flags.is_set(species, FlagKind::Seen),
        caught: flags.is_set(species, FlagKind::Caught),
    };

    let in_mode: Vec<ListEntry> = translator.species_in(mode).map(entry).collect();

    let mut rows = match order {
        ListOrder::Numerical => {
            let shown = in_mode.iter().rposition(|row| row.seen).map_or(0, |last| last + 1);
            return in_mode.into_iter().take(shown).collect();
        }
        ListOrder::Alphabetical => filter(in_mode, |row| row.seen),
        ListOrder::Heaviest
        | ListOrder::Lightest
        | ListOrder::Tallest
        | ListOrder::Smallest => filter(in_mode, |row| row.caught),
        ListOrder::FirstSeen => filter(in_mode, |row| {
            flags.first_ordinal(row.species, FlagKind::Seen).is_some()
        }),
        ListOrder::FirstCaught => filter(in_mode, |row| {
            flags.first_ordinal(row.species, FlagKind::Caught).is_some()
        }),
    };

    // Stable sorts: ties keep the scheme's own order.
    match order {
        ListOrder::Numerical => {}
        ListOrder::Alphabetical => rows.sort_by(|a, b| {
            metadata.info(a.species).name.cmp(&metadata.info(b.species).name)
        }),
        ListOrder::Heaviest => {
            rows.sort_by_key(|row| Reverse(metadata.measurement(row.species, Measurement::Weight)))
        }
        ListOrder::Lightest => {
            rows.sort_by_key(|row| metadata.measurement(row.species, Measurement::Weight))
        }
        ListOrder::Tallest => {
            rows.sort_by_key(|row| Reverse(metadata.measurement(row.species, Measurement::Height)))
        }
        ListOrder::Smallest => {
            rows.sort_by_key(|row| metadata.measurement(row.species, Measurement::Height))
        }
        ListOrder::FirstSeen => {
            rows.sort_by_key(|row| flags.first_ordinal(row.species, FlagKind::Seen))
        }
        ListOrder::FirstCaught => {
            rows.sort_by_key(|row| flags.first_ordinal(row.species, FlagKind::Caught))
        }
    }
    rows
}

fn filter(rows: Vec<ListEntry>, keep: impl Fn(&ListEntry) -> bool) -> Vec<ListEntry> {
    rows.into_iter().filter(|row| keep(row)).collect()
}
