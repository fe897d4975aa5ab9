#[cfg(test)]
mod tests {
    use crate::errors::{DexError, IndexKind, Precondition};
    use crate::pokedex::Pokedex;
    use crate::sprite::{create_catalog_sprite, SpritePlacement, VisualVariant};
    use crate::tests::common::{RecordingSprites, TestDexBuilder};
    use pretty_assertions::assert_eq;
    use schema::{DexMode, FlagKind};

    #[test]
    fn test_never_seen_species_is_refused() {
        let mut dex = TestDexBuilder::new(5).build_pokedex();

        assert_eq!(
            dex.sprite_request(3, 12345, 0xDEAD_BEEF),
            Err(DexError::PreconditionViolation(Precondition::NeverSeen(3)))
        );

        dex.set_flag(3, FlagKind::Seen).unwrap();
        let request = dex.sprite_request(3, 12345, 0xDEAD_BEEF).unwrap();
        assert_eq!(request.species.raw(), 3);
        assert_eq!(request.individual_id, 12345);
        assert_eq!(request.personality, 0xDEAD_BEEF);
    }

    #[test]
    fn test_request_by_regional_index() {
        let mut dex = TestDexBuilder::new(6)
            .with_regional_order(vec![6, 2])
            .build_pokedex();
        dex.set_flag(6, FlagKind::Caught).unwrap();

        let request = dex
            .sprites()
            .build_for_ordinal(DexMode::Regional, 1, 7, 9)
            .unwrap();
        assert_eq!(request.species.raw(), 6);

        assert_eq!(
            dex.sprites().build_for_ordinal(DexMode::Regional, 3, 7, 9),
            Err(DexError::OutOfRange {
                kind: IndexKind::RegionalOrdinal,
                value: 3,
                max: 2
            })
        );
        assert_eq!(
            dex.sprites().build_for_ordinal(DexMode::Regional, 2, 7, 9),
            Err(DexError::PreconditionViolation(Precondition::NeverSeen(2)))
        );
    }

    #[test]
    fn test_variant_uses_species_forms() {
        let mut dex = TestDexBuilder::new(4).with_forms(4, 28).build_pokedex();
        dex.set_flag(3, FlagKind::Seen).unwrap();
        dex.set_flag(4, FlagKind::Seen).unwrap();

        // Low two bits of every byte set: form 255 % 28.
        let personality = 0x0303_0303;
        let plain = dex.sprite_request(3, 0x0001_0100, personality).unwrap();
        let formed = dex.sprite_request(4, 0x0001_0100, personality).unwrap();

        assert_eq!(plain.variant.form, 0);
        assert_eq!(formed.variant.form, 3);
        assert!(!formed.variant.shiny);
    }

    #[test]
    fn test_shiny_individual() {
        let mut dex = TestDexBuilder::new(2).build_pokedex();
        dex.set_flag(1, FlagKind::Seen).unwrap();

        let request = dex.sprite_request(1, 0xABCD_1234, 0xABCD_1230).unwrap();
        assert_eq!(
            request.variant,
            VisualVariant {
                shiny: true,
                form: 0
            }
        );
    }

    #[test]
    fn test_bundled_unown_forms() {
        let mut dex = Pokedex::bundled().unwrap();
        dex.set_flag(201, FlagKind::Seen).unwrap();

        let request = dex.sprite_request(201, 1, 0x0000_0002).unwrap();
        assert_eq!(request.variant.form, 2);
    }

    #[test]
    fn test_catalog_sprite_reaches_sprite_system() {
        let mut dex = TestDexBuilder::new(3).build_pokedex();
        dex.set_flag(2, FlagKind::Seen).unwrap();
        let mut sprites = RecordingSprites::default();
        let placement = SpritePlacement {
            x: 48,
            y: 56,
            palette_slot: 4,
        };

        let handle = create_catalog_sprite(&dex.sprites(), &mut sprites, 2, placement).unwrap();

        assert_eq!(handle, Some(0));
        assert_eq!(sprites.created.len(), 1);
        let (request, recorded_placement) = sprites.created[0];
        assert_eq!(request.species.raw(), 2);
        assert_eq!(request.individual_id, 0);
        assert_eq!(request.personality, 0);
        assert_eq!(recorded_placement, placement);

        assert_eq!(
            create_catalog_sprite(&dex.sprites(), &mut sprites, 1, placement),
            Err(DexError::PreconditionViolation(Precondition::NeverSeen(1)))
        );
        assert_eq!(sprites.created.len(), 1);
    }

    #[test]
    fn test_sprite_system_may_decline() {
        let mut dex = TestDexBuilder::new(3).build_pokedex();
        dex.set_flag(1, FlagKind::Seen).unwrap();
        let mut sprites = RecordingSprites {
            capacity: Some(0),
            ..Default::default()
        };

        let handle =
            create_catalog_sprite(&dex.sprites(), &mut sprites, 1, SpritePlacement::default());
        assert_eq!(handle, Ok(None));
    }
}
