//! Keplerian orbits in fixed point: orbit dimensions, the element set, mean
//! motion, and anomaly/position at an elapsed time.

mod elements;
mod error;
mod kepler;

pub use elements::{OrbitDimensions, OrbitOrientation, OrbitalElements, OrbitalState};
pub use error::OrbitError;
pub use kepler::{
    KEPLER_EPSILON, KEPLER_ITERATIONS, eccentric_anomaly, mean_angular_motion, mean_anomaly,
    orbital_period, orbital_radius, true_anomaly,
};
