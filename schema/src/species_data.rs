use serde::{Deserialize, Serialize};

/// One species in national order, as stored in the content asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub national_number: u16,
    pub name: String,
    pub height: u16, // decimeters
    pub weight: u16, // hectograms
    #[serde(default)]
    pub completion_exempt: bool, // event-only species, ignored by completion checks
    #[serde(default)]
    pub personality_forms: u8, // number of forms picked by personality, 0 if none
}

/// The whole catalog content: the national species list plus the regional
/// ordering expressed as national numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DexData {
    pub region: String,
    pub species: Vec<SpeciesEntry>,
    pub regional_order: Vec<u16>,
}

impl SpeciesEntry {
    pub fn new(national_number: u16, name: &str, height: u16, weight: u16) -> Self {
        SpeciesEntry {
            national_number,
            name: name.to_string(),
            height,
            weight,
            completion_exempt: false,
            personality_forms: 0,
        }
    }
}
