use orrery_stars::StarError;
use orrery_worlds::WorldError;

/// Errors from universe queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UniverseError {
    /// An object index at or beyond the sector's object count.
    #[error("sector holds {count} objects, no object {index}")]
    ObjectIndexOutOfRange { index: u64, count: u64 },

    #[error(transparent)]
    Star(#[from] StarError),

    #[error(transparent)]
    World(#[from] WorldError),
}
