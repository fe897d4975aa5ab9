use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Which numbering scheme the catalog is browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum DexMode {
    Regional,
    National,
}

/// The two per-species flags the catalog tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum FlagKind {
    Seen,
    Caught,
}

/// Case selector for the combined get/set flag entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum FlagCase {
    GetSeen,
    GetCaught,
    SetSeen,
    SetCaught,
}

/// Static measurement selector for height/weight lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum Measurement {
    Height,
    Weight,
}

impl FlagCase {
    pub fn kind(self) -> FlagKind {
        match self {
            FlagCase::GetSeen | FlagCase::SetSeen => FlagKind::Seen,
            FlagCase::GetCaught | FlagCase::SetCaught => FlagKind::Caught,
        }
    }

    pub fn is_set(self) -> bool {
        matches!(self, FlagCase::SetSeen | FlagCase::SetCaught)
    }
}

impl DexMode {
    pub fn toggled(self) -> DexMode {
        match self {
            DexMode::Regional => DexMode::National,
            DexMode::National => DexMode::Regional,
        }
    }
}
