#[cfg(test)]
mod tests {
    use crate::errors::SnapshotError;
    use crate::flags::FlagSnapshot;
    use crate::listing::ListOrder;
    use crate::pokedex::Pokedex;
    use crate::tests::common::{init_logging, MemoryStorage, TestDexBuilder};
    use pretty_assertions::assert_eq;
    use schema::{DexMode, FlagKind};

    #[test]
    fn test_save_then_load_into_new_game() {
        init_logging();
        let mut storage = MemoryStorage::default();

        let mut original = Pokedex::bundled().unwrap();
        original.set_flag(1, FlagKind::Caught).unwrap();
        original.set_flag(152, FlagKind::Seen).unwrap();
        original.set_flag(25, FlagKind::Caught).unwrap();
        original.save_to(&mut storage).unwrap();
        assert_eq!(storage.writes, 1);

        let mut loaded = Pokedex::bundled().unwrap();
        assert!(matches!(loaded.load_from(&mut storage), Ok(true)));

        assert_eq!(loaded.flags(), original.flags());
        assert_eq!(loaded.first_caught(25), Ok(Some(5)));
        assert_eq!(loaded.count(DexMode::Regional, FlagKind::Caught), 2);
        assert_eq!(loaded.count(DexMode::National, FlagKind::Seen), 3);
    }

    #[test]
    fn test_load_without_stored_bytes_keeps_state() {
        let mut storage = MemoryStorage::default();
        let mut dex = TestDexBuilder::new(5).build_pokedex();
        dex.set_flag(2, FlagKind::Seen).unwrap();

        assert!(matches!(dex.load_from(&mut storage), Ok(false)));
        assert_eq!(dex.get_flag(2, FlagKind::Seen), Ok(true));
    }

    #[test]
    fn test_load_rejects_save_from_other_content() {
        let mut storage = MemoryStorage::default();
        TestDexBuilder::new(5).build_pokedex().save_to(&mut storage).unwrap();

        let mut dex = TestDexBuilder::new(9).build_pokedex();
        dex.set_flag(9, FlagKind::Seen).unwrap();

        assert!(matches!(
            dex.load_from(&mut storage),
            Err(SnapshotError::SpeciesCountMismatch { expected: 9, found: 5 })
        ));
        // A failed load leaves the current flags alone.
        assert_eq!(dex.get_flag(9, FlagKind::Seen), Ok(true));
    }

    #[test]
    fn test_load_normalizes_inconsistent_save() {
        let mut snapshot = TestDexBuilder::new(8).build_pokedex().flags().snapshot();
        snapshot.caught[0] = 0b1000_0001; // species 1 and 8 caught, never seen
        snapshot.first_caught[0] = 1;
        let mut storage = MemoryStorage {
            bytes: Some(snapshot.to_bytes().unwrap()),
            writes: 0,
        };

        let mut dex = TestDexBuilder::new(8).build_pokedex();
        assert!(matches!(dex.load_from(&mut storage), Ok(true)));

        for raw in [1, 8] {
            assert_eq!(dex.get_flag(raw, FlagKind::Seen), Ok(true));
            assert_eq!(dex.get_flag(raw, FlagKind::Caught), Ok(true));
            assert!(dex.first_seen(raw).unwrap().is_some());
        }
        assert_eq!(dex.first_seen(1), Ok(Some(1)));
        assert_eq!(dex.first_seen(8), Ok(Some(2)));
        assert!(!dex.has_all_regional());

        let discovered: Vec<u16> = dex
            .listing(DexMode::National, ListOrder::FirstSeen)
            .iter()
            .map(|row| row.species.raw())
            .collect();
        assert_eq!(discovered, vec![1, 8]);

        // Later sightings continue after the stamped ordinals.
        dex.set_flag(4, FlagKind::Seen).unwrap();
        assert_eq!(dex.first_seen(4), Ok(Some(3)));
    }

    #[test]
    fn test_load_rejects_exhausted_ordinals() {
        let mut snapshot = TestDexBuilder::new(8).build_pokedex().flags().snapshot();
        snapshot.first_seen[2] = u32::MAX;
        let mut storage = MemoryStorage {
            bytes: Some(snapshot.to_bytes().unwrap()),
            writes: 0,
        };
        let mut dex = TestDexBuilder::new(8).build_pokedex();
        dex.set_flag(5, FlagKind::Seen).unwrap();

        assert!(matches!(dex.load_from(&mut storage), Err(SnapshotError::Malformed(_))));
        // A rejected save leaves the running game untouched.
        assert_eq!(dex.get_flag(5, FlagKind::Seen), Ok(true));
    }

    #[test]
    fn test_corrupt_bytes_are_reported() {
        let mut storage = MemoryStorage {
            bytes: Some(vec![0x80, 0x80, 0x80]),
            writes: 0,
        };
        let mut dex = TestDexBuilder::new(3).build_pokedex();

        assert!(matches!(dex.load_from(&mut storage), Err(SnapshotError::Decode(_))));
    }

    #[test]
    fn test_snapshot_is_stable_across_save_cycles() {
        let mut dex = TestDexBuilder::new(16).build_pokedex();
        for raw in [3, 9, 16] {
            dex.set_flag(raw, FlagKind::Caught).unwrap();
        }

        let first = dex.flags().snapshot().to_bytes().unwrap();
        let reparsed = FlagSnapshot::from_bytes(&first).unwrap();
        assert_eq!(reparsed.to_bytes().unwrap(), first);
    }
}
