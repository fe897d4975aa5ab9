use std::fmt;
use thiserror::Error;

/// Which index space a rejected value belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// National species number
    Species,
    /// Position inside the regional numbering
    RegionalOrdinal,
}

/// Product rules a caller can break without passing a bad index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// Sprite data was requested for a species the player has no entry for
    NeverSeen(u16),
    /// The catalog must be open for this operation
    SessionClosed,
    /// The catalog is already open
    SessionAlreadyOpen,
    /// A flag store was paired with content of a different species count
    TableMismatch { flags: u16, tables: u16 },
}

/// Main error type for the catalog engine.
///
/// Every public lookup or mutation returns one of these instead of reading
/// past a table; callers decide whether any of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DexError {
    /// Species number or ordinal outside its valid domain
    #[error("{kind} {value} is out of range 1..={max}")]
    OutOfRange { kind: IndexKind, value: u32, max: u16 },
    /// The reserved "none" value (0) was passed where a concrete one was required
    #[error("{0} 0 is the \"none\" sentinel")]
    InvalidSentinel(IndexKind),
    /// A product-level rule was broken
    #[error("precondition violated: {0}")]
    PreconditionViolation(Precondition),
}

/// Errors raised while loading or validating catalog content
#[derive(Debug, Error)]
pub enum DexDataError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse content: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The content has no species at all
    #[error("content defines no species")]
    Empty,
    /// National numbers must run 1..=N in order
    #[error("species at position {position} has national number {found}, expected {expected}")]
    NationalGap {
        position: usize,
        expected: u16,
        found: u16,
    },
    /// Regional ordering names a species that does not exist
    #[error("regional entry {position} names unknown species {species}")]
    UnknownRegionalSpecies { position: usize, species: u16 },
    /// Regional ordering lists a species twice
    #[error("species {0} appears twice in the regional ordering")]
    DuplicateRegionalSpecies(u16),
    /// More species than the 16-bit id space can address
    #[error("{0} species exceed the addressable range")]
    TooManySpecies(usize),
}

/// Errors raised while moving flag state to or from its persisted form
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode flag snapshot: {0}")]
    Encode(postcard::Error),
    #[error("failed to decode flag snapshot: {0}")]
    Decode(postcard::Error),
    /// The snapshot was written for a different national species count
    #[error("snapshot covers {found} species, loaded content has {expected}")]
    SpeciesCountMismatch { expected: usize, found: usize },
    /// A table has the wrong length or holds a value no store can produce
    #[error("malformed snapshot: {0}")]
    Malformed(String),
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Species => write!(f, "species"),
            IndexKind::RegionalOrdinal => write!(f, "regional ordinal"),
        }
    }
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precondition::NeverSeen(species) => {
                write!(f, "species {} has never been seen", species)
            }
            Precondition::SessionClosed => write!(f, "catalog is not open"),
            Precondition::SessionAlreadyOpen => write!(f, "catalog is already open"),
            Precondition::TableMismatch { flags, tables } => write!(
                f,
                "flag store covers {} species, content has {}",
                flags, tables
            ),
        }
    }
}

/// Type alias for Results using DexError
pub type DexResult<T> = Result<T, DexError>;

/// Type alias for Results using DexDataError
pub type DexDataResult<T> = Result<T, DexDataError>;
