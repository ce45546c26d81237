use orrery_math::MathError;
use orrery_orbit::OrbitError;
use orrery_stars::StarError;

use crate::WorldClass;

/// Errors raised while generating planets, moons and whole systems.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// An ordinal that names no enumerator.
    #[error("invalid {kind} ordinal {value}")]
    InvalidOrdinal { kind: &'static str, value: u8 },

    /// A planet index outside `0..total`.
    #[error("planet index {index} is outside a system of {total}")]
    PlanetIndexOutOfRange { index: u32, total: u32 },

    /// The class has no orbit table at this level of the hierarchy, such as
    /// a ring orbiting a star or a belt orbiting a planet.
    #[error("{0:?} has no orbit layout at this level")]
    NoOrbitTable(WorldClass),

    /// Moons were requested for a class that never hosts them.
    #[error("{0:?} worlds have no moons")]
    NoMoons(WorldClass),

    #[error(transparent)]
    Star(#[from] StarError),

    #[error(transparent)]
    Orbit(#[from] OrbitError),

    #[error(transparent)]
    Math(#[from] MathError),
}
