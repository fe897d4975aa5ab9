use crate::errors::DexResult;
use crate::species::SpeciesId;
use schema::{DexData, Measurement};

/// Static per-species attributes the catalog pages display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesInfo {
    pub name: String,
    pub height: u16, // decimeters
    pub weight: u16, // hectograms
    pub completion_exempt: bool,
    pub personality_forms: u8,
}

/// Read-only lookup of species attributes keyed by national number.
#[derive(Debug, Clone)]
pub struct SpeciesMetadata {
    entries: Vec<SpeciesInfo>,
}

impl SpeciesMetadata {
    /// Expects content already validated by `IndexTranslator::from_data`,
    /// which guarantees entries are in national order.
    pub fn from_data(data: &DexData) -> Self {
        let entries = data
            .species
            .iter()
            .map(|entry| SpeciesInfo {
                name: entry.name.clone(),
                height: entry.height,
                weight: entry.weight,
                completion_exempt: entry.completion_exempt,
                personality_forms: entry.personality_forms,
            })
            .collect();

        SpeciesMetadata { entries }
    }

    fn national_count(&self) -> u16 {
        self.entries.len() as u16
    }

    /// Every attribute of a species by raw national number
    pub fn species_info(&self, raw: u16) -> DexResult<&SpeciesInfo> {
        let species = SpeciesId::new(raw, self.national_count())?;
        Ok(self.info(species))
    }

    // Callers pass ids validated against the same content.
    pub(crate) fn info(&self, species: SpeciesId) -> &SpeciesInfo {
        &self.entries[species.index()]
    }

    /// Height or weight of a species by raw national number
    pub fn get_height_weight(&self, raw: u16, which: Measurement) -> DexResult<u16> {
        let species = SpeciesId::new(raw, self.national_count())?;
        Ok(self.measurement(species, which))
    }

    pub(crate) fn measurement(&self, species: SpeciesId, which: Measurement) -> u16 {
        let info = self.info(species);
        match which {
            Measurement::Height => info.height,
            Measurement::Weight => info.weight,
        }
    }

    pub fn name(&self, raw: u16) -> DexResult<&str> {
        Ok(&self.species_info(raw)?.name)
    }
}
