use orrery_math::{MathError, Real};

/// Errors raised by orbital mechanics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrbitError {
    /// Semimajor axes must be strictly positive.
    #[error("semimajor axis {0} is not positive")]
    NonPositiveAxis(Real),

    /// Only closed orbits (`0 <= e < 1`) are supported.
    #[error("eccentricity {0} does not describe a closed orbit")]
    OpenOrbit(Real),

    /// The central body exerts no pull, so the orbit never advances.
    #[error("orbit has no angular motion")]
    NoMotion,

    #[error(transparent)]
    Math(#[from] MathError),
}
