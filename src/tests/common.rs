use crate::dex_data::DexTables;
use crate::flags::DexStorage;
use crate::pokedex::Pokedex;
use crate::sprite::{SpritePlacement, SpriteRenderRequest, SpriteSystem};
use schema::{DexData, SpeciesEntry};
use std::sync::Arc;

/// Installs a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A builder for small catalog contents with predictable values.
///
/// # Example
/// ```
/// let dex = TestDexBuilder::new(6)
///     .with_regional_order(vec![4, 5, 6, 1])
///     .with_exempt(6)
///     .build_pokedex();
/// ```
pub struct TestDexBuilder {
    national_count: u16,
    regional_order: Option<Vec<u16>>,
    exempt: Vec<u16>,
    forms: Vec<(u16, u8)>,
}

impl TestDexBuilder {
    /// Species 1..=national_count, all regional in national order by default.
    pub fn new(national_count: u16) -> Self {
        Self {
            national_count,
            regional_order: None,
            exempt: Vec::new(),
            forms: Vec::new(),
        }
    }

    pub fn with_regional_order(mut self, order: Vec<u16>) -> Self {
        self.regional_order = Some(order);
        self
    }

    pub fn with_exempt(mut self, species: u16) -> Self {
        self.exempt.push(species);
        self
    }

    pub fn with_forms(mut self, species: u16, forms: u8) -> Self {
        self.forms.push((species, forms));
        self
    }

    pub fn build_data(self) -> DexData {
        let species = (1..=self.national_count)
            .map(|n| {
                let mut entry = SpeciesEntry::new(n, &format!("Species{:03}", n), n, n * 10);
                entry.completion_exempt = self.exempt.contains(&n);
                entry.personality_forms = self
                    .forms
                    .iter()
                    .find(|(species, _)| *species == n)
                    .map_or(0, |(_, forms)| *forms);
                entry
            })
            .collect();

        DexData {
            region: "Testland".to_string(),
            species,
            regional_order: self
                .regional_order
                .unwrap_or_else(|| (1..=self.national_count).collect()),
        }
    }

    pub fn build(self) -> Arc<DexTables> {
        let data = self.build_data();
        match DexTables::from_data(&data) {
            Ok(tables) => Arc::new(tables),
            Err(err) => panic!("Failed to build test dex tables: {}", err),
        }
    }

    pub fn build_pokedex(self) -> Pokedex {
        Pokedex::new(self.build())
    }
}

/// Save-file stand-in holding the dex bytes in memory.
#[derive(Default)]
pub struct MemoryStorage {
    pub bytes: Option<Vec<u8>>,
    pub writes: usize,
}

impl DexStorage for MemoryStorage {
    fn load_dex_bytes(&mut self) -> Option<Vec<u8>> {
        self.bytes.clone()
    }

    fn store_dex_bytes(&mut self, bytes: Vec<u8>) {
        self.bytes = Some(bytes);
        self.writes += 1;
    }
}

/// Sprite system stand-in that records every request it receives.
#[derive(Default)]
pub struct RecordingSprites {
    pub created: Vec<(SpriteRenderRequest, SpritePlacement)>,
    pub capacity: Option<usize>,
}

impl SpriteSystem for RecordingSprites {
    type Handle = usize;

    fn create_sprite(
        &mut self,
        request: &SpriteRenderRequest,
        placement: SpritePlacement,
    ) -> Option<usize> {
        if self.capacity.is_some_and(|cap| self.created.len() >= cap) {
            return None;
        }
        self.created.push((*request, placement));
        Some(self.created.len() - 1)
    }
}
