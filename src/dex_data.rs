use crate::errors::{DexDataResult, DexError, DexResult, Precondition};
use crate::flags::FlagStore;
use crate::metadata::SpeciesMetadata;
use crate::translator::IndexTranslator;
use schema::DexData;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

const BUNDLED_DEX_RON: &str = include_str!("../data/dex.ron");

static BUNDLED_TABLES: OnceLock<Arc<DexTables>> = OnceLock::new();

/// Immutable tables built once from content and shared by every reader.
#[derive(Debug)]
pub struct DexTables {
    pub translator: IndexTranslator,
    pub metadata: SpeciesMetadata,
}

impl DexTables {
    pub fn from_data(data: &DexData) -> DexDataResult<Self> {
        let translator = IndexTranslator::from_data(data)?;
        let metadata = SpeciesMetadata::from_data(data);

        log::debug!(
            "Built dex tables for {}: {} national, {} regional",
            translator.region(),
            translator.national_count(),
            translator.regional_count()
        );

        Ok(DexTables {
            translator,
            metadata,
        })
    }

    /// Fail unless `flags` holds exactly one entry per species in these tables
    pub fn check_flags(&self, flags: &FlagStore) -> DexResult<()> {
        let tables = self.translator.national_count();
        if flags.national_count() != tables {
            return Err(DexError::PreconditionViolation(Precondition::TableMismatch {
                flags: flags.national_count(),
                tables,
            }));
        }
        Ok(())
    }
}

/// Parse content from a RON document
pub fn parse_dex_data(content: &str) -> DexDataResult<DexData> {
    Ok(ron::from_str(content)?)
}

/// Load content from a RON file on disk
pub fn load_dex_data(path: &Path) -> DexDataResult<DexData> {
    let content = fs::read_to_string(path)?;
    let data = parse_dex_data(&content)?;
    log::info!(
        "Loaded {} species for {} from {}",
        data.species.len(),
        data.region,
        path.display()
    );
    Ok(data)
}

/// Load and build tables from a RON file
pub fn load_dex_tables(path: &Path) -> DexDataResult<Arc<DexTables>> {
    let data = load_dex_data(path)?;
    Ok(Arc::new(DexTables::from_data(&data)?))
}

/// Tables for the content shipped with the crate, built on first use
pub fn bundled_tables() -> DexDataResult<Arc<DexTables>> {
    if let Some(tables) = BUNDLED_TABLES.get() {
        return Ok(Arc::clone(tables));
    }
    let data = parse_dex_data(BUNDLED_DEX_RON)?;
    let tables = Arc::new(DexTables::from_data(&data)?);
    Ok(Arc::clone(BUNDLED_TABLES.get_or_init(|| tables)))
}
