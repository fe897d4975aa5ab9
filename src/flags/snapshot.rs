use super::{FlagStore, FIRST_ORDINAL};
use crate::errors::SnapshotError;
use serde::{Deserialize, Serialize};

/// Persisted form of a [`FlagStore`]: bits packed eight species per byte
/// (species 1 is bit 0 of byte 0) and ordinals with 0 meaning "never".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSnapshot {
    pub species_count: u16,
    pub seen: Vec<u8>,
    pub caught: Vec<u8>,
    pub first_seen: Vec<u32>,
    pub first_caught: Vec<u32>,
    pub next_ordinal: u32,
}

/// The save-file side. It hands over and receives opaque bytes; the layout
/// of the surrounding save belongs to the implementor.
pub trait DexStorage {
    /// Previously stored dex bytes, `None` for a save that has none yet
    fn load_dex_bytes(&mut self) -> Option<Vec<u8>>;

    fn store_dex_bytes(&mut self, bytes: Vec<u8>);
}

fn pack(bits: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; bits.len().div_ceil(8)];
    for (i, &set) in bits.iter().enumerate() {
        if set {
            bytes[i / 8] |= 1 << (i % 8);
        }
    }
    bytes
}

fn unpack(bytes: &[u8], len: usize) -> Vec<bool> {
    (0..len).map(|i| bytes[i / 8] & (1 << (i % 8)) != 0).collect()
}

impl FlagSnapshot {
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        postcard::to_allocvec(self).map_err(SnapshotError::Encode)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        postcard::from_bytes(bytes).map_err(SnapshotError::Decode)
    }

    fn check_layout(&self) -> Result<(), SnapshotError> {
        let len = usize::from(self.species_count);
        let packed = len.div_ceil(8);
        if self.seen.len() != packed || self.caught.len() != packed {
            return Err(SnapshotError::Malformed(format!(
                "expected {} flag bytes, found seen={} caught={}",
                packed,
                self.seen.len(),
                self.caught.len()
            )));
        }
        if self.first_seen.len() != len || self.first_caught.len() != len {
            return Err(SnapshotError::Malformed(format!(
                "expected {} ordinals, found seen={} caught={}",
                len,
                self.first_seen.len(),
                self.first_caught.len()
            )));
        }
        // At most two stamps per species, so u32::MAX only shows up in corrupt saves.
        if self.next_ordinal == u32::MAX {
            return Err(SnapshotError::Malformed(
                "chronological counter is exhausted".to_string(),
            ));
        }
        if self
            .first_seen
            .iter()
            .chain(&self.first_caught)
            .any(|&ordinal| ordinal == u32::MAX)
        {
            return Err(SnapshotError::Malformed(
                "recorded ordinal is out of range".to_string(),
            ));
        }
        Ok(())
    }
}

impl FlagStore {
    pub fn snapshot(&self) -> FlagSnapshot {
        FlagSnapshot {
            species_count: self.national_count(),
            seen: pack(&self.seen),
            caught: pack(&self.caught),
            first_seen: self.first_seen.iter().map(|o| o.unwrap_or(0)).collect(),
            first_caught: self.first_caught.iter().map(|o| o.unwrap_or(0)).collect(),
            next_ordinal: self.next_ordinal,
        }
    }

    /// Rebuild a store from persisted state.
    ///
    /// Caught-but-unseen species are normalized to seen, and the counter is
    /// moved past every recorded ordinal.
    pub fn restore(snapshot: &FlagSnapshot, national_count: u16) -> Result<Self, SnapshotError> {
        if snapshot.species_count != national_count {
            return Err(SnapshotError::SpeciesCountMismatch {
                expected: usize::from(national_count),
                found: usize::from(snapshot.species_count),
            });
        }
        snapshot.check_layout()?;

        let len = usize::from(national_count);
        let mut seen = unpack(&snapshot.seen, len);
        let caught = unpack(&snapshot.caught, len);

        let ordinal = |&raw: &u32| (raw != 0).then_some(raw);
        let mut first_seen: Vec<Option<u32>> = snapshot.first_seen.iter().map(ordinal).collect();
        let first_caught: Vec<Option<u32>> = snapshot.first_caught.iter().map(ordinal).collect();

        let highest = first_seen
            .iter()
            .chain(&first_caught)
            .flatten()
            .copied()
            .max()
            .unwrap_or(0);
        let mut next_ordinal = snapshot
            .next_ordinal
            .max(highest.saturating_add(1))
            .max(FIRST_ORDINAL);
        if next_ordinal != snapshot.next_ordinal {
            log::warn!(
                "Snapshot counter {} was behind recorded ordinals; using {}",
                snapshot.next_ordinal,
                next_ordinal
            );
        }

        // Caught species missing their seen bit get it back, along with a
        // first-seen ordinal no later than their first catch.
        let mut normalized = 0;
        for i in 0..len {
            if !caught[i] || seen[i] {
                continue;
            }
            seen[i] = true;
            if first_seen[i].is_none() {
                first_seen[i] = match first_caught[i] {
                    Some(caught_at) => Some(caught_at),
                    None => {
                        let stamped = next_ordinal;
                        next_ordinal = next_ordinal.saturating_add(1);
                        Some(stamped)
                    }
                };
            }
            normalized += 1;
        }
        if normalized > 0 {
            log::warn!(
                "Snapshot had {} caught species not marked seen; marked them seen",
                normalized
            );
        }

        Ok(FlagStore {
            seen,
            caught,
            first_seen,
            first_caught,
            next_ordinal,
        })
    }
}
