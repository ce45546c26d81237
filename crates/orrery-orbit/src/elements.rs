//! Orbital element sets and their evaluation at a point in time.

use orrery_math::Real;
use serde::{Deserialize, Serialize};

use crate::OrbitError;
use crate::kepler::{
    eccentric_anomaly, mean_angular_motion, mean_anomaly, orbital_radius, true_anomaly,
};

/// Radial extent of an orbit, in meters from the central body.
///
/// `clearance` is the distance out to which the orbit has swept its
/// neighbourhood clear; the next orbit outward starts no closer than this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitDimensions {
    pub periapsis: Real,
    pub apoapsis: Real,
    pub clearance: Real,
}

impl OrbitDimensions {
    /// Half the sum of the apsides.
    #[must_use]
    pub fn semimajor_axis(&self) -> Real {
        (self.periapsis + self.apoapsis) * Real::HALF
    }

    /// `(apoapsis − periapsis) / (apoapsis + periapsis)`, zero for a
    /// degenerate orbit at the centre.
    #[must_use]
    pub fn eccentricity(&self) -> Real {
        let sum = self.periapsis + self.apoapsis;
        if sum == Real::ZERO {
            return Real::ZERO;
        }
        (self.apoapsis - self.periapsis) / sum
    }
}

/// Orientation of the orbital plane and the body's phase at epoch. Radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitOrientation {
    pub inclination: Real,
    pub longitude_of_ascending_node: Real,
    pub argument_of_periapsis: Real,
    pub mean_anomaly_at_epoch: Real,
}

/// The full Keplerian element set at epoch.
///
/// Distances are meters, angles radians. The shape fields are redundant
/// (`semimajor_axis` and `eccentricity` follow from the apsides) but are kept
/// together so callers never recompute them differently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub periapsis: Real,
    pub apoapsis: Real,
    pub clearance: Real,
    pub eccentricity: Real,
    pub semimajor_axis: Real,
    pub longitude_of_ascending_node: Real,
    pub inclination: Real,
    pub argument_of_periapsis: Real,
    pub mean_anomaly_at_epoch: Real,
}

/// Where a body is on its orbit at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitalState {
    pub mean_anomaly: Real,
    pub eccentric_anomaly: Real,
    pub true_anomaly: Real,
    /// Distance from the central body in meters.
    pub radius: Real,
    /// Offset from the central body in meters, in the reference frame of
    /// the parent's equator.
    pub position: [Real; 3],
}

impl OrbitalElements {
    /// Combine radial dimensions with an orientation.
    pub fn from_dimensions(dimensions: OrbitDimensions, orientation: OrbitOrientation) -> Self {
        Self {
            periapsis: dimensions.periapsis,
            apoapsis: dimensions.apoapsis,
            clearance: dimensions.clearance,
            eccentricity: dimensions.eccentricity(),
            semimajor_axis: dimensions.semimajor_axis(),
            longitude_of_ascending_node: orientation.longitude_of_ascending_node,
            inclination: orientation.inclination,
            argument_of_periapsis: orientation.argument_of_periapsis,
            mean_anomaly_at_epoch: orientation.mean_anomaly_at_epoch,
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> OrbitDimensions {
        OrbitDimensions {
            periapsis: self.periapsis,
            apoapsis: self.apoapsis,
            clearance: self.clearance,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> OrbitOrientation {
        OrbitOrientation {
            inclination: self.inclination,
            longitude_of_ascending_node: self.longitude_of_ascending_node,
            argument_of_periapsis: self.argument_of_periapsis,
            mean_anomaly_at_epoch: self.mean_anomaly_at_epoch,
        }
    }

    /// Mean angular motion around a body of `central_mass_sols`, radians per year.
    pub fn mean_motion(&self, central_mass_sols: Real) -> Result<Real, OrbitError> {
        mean_angular_motion(central_mass_sols, self.semimajor_axis)
    }

    /// Evaluate the orbit `elapsed_years` after epoch.
    pub fn state_at(
        &self,
        central_mass_sols: Real,
        elapsed_years: Real,
    ) -> Result<OrbitalState, OrbitError> {
        let motion = self.mean_motion(central_mass_sols)?;
        let mean = mean_anomaly(self.mean_anomaly_at_epoch, motion, elapsed_years);
        let eccentric = eccentric_anomaly(mean, self.eccentricity);
        let true_anomaly = true_anomaly(eccentric, self.eccentricity)?;
        let radius = orbital_radius(self.semimajor_axis, self.eccentricity, eccentric);

        // Position in the orbital plane.
        let x_orb = radius * true_anomaly.cos();
        let y_orb = radius * true_anomaly.sin();

        // Rotate into the reference frame.
        let (sin_o, cos_o) = (
            self.longitude_of_ascending_node.sin(),
            self.longitude_of_ascending_node.cos(),
        );
        let (sin_i, cos_i) = (self.inclination.sin(), self.inclination.cos());
        let (sin_w, cos_w) = (
            self.argument_of_periapsis.sin(),
            self.argument_of_periapsis.cos(),
        );

        let x = x_orb * (cos_o * cos_w - sin_o * sin_w * cos_i)
            - y_orb * (cos_o * sin_w + sin_o * cos_w * cos_i);
        let y = x_orb * (sin_o * cos_w + cos_o * sin_w * cos_i)
            - y_orb * (sin_o * sin_w - cos_o * cos_w * cos_i);
        let z = x_orb * (sin_w * sin_i) + y_orb * (cos_w * sin_i);

        Ok(OrbitalState {
            mean_anomaly: mean,
            eccentric_anomaly: eccentric,
            true_anomaly,
            radius,
            position: [x, y, z],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_math::units::AU;

    fn length(position: [Real; 3]) -> f64 {
        position
            .iter()
            .map(|c| c.to_f64() * c.to_f64())
            .sum::<f64>()
            .sqrt()
    }

    fn circular(radius: Real, orientation: OrbitOrientation) -> OrbitalElements {
        OrbitalElements::from_dimensions(
            OrbitDimensions {
                periapsis: radius,
                apoapsis: radius,
                clearance: radius,
            },
            orientation,
        )
    }

    #[test]
    fn test_from_dimensions_derives_shape() {
        let dims = OrbitDimensions {
            periapsis: Real::ONE,
            apoapsis: Real::from_int(3),
            clearance: Real::from_int(4),
        };
        let elements = OrbitalElements::from_dimensions(dims, OrbitOrientation::default());
        assert_eq!(elements.semimajor_axis, Real::TWO);
        assert_eq!(elements.eccentricity, Real::HALF);
        assert_eq!(elements.dimensions(), dims);
    }

    #[test]
    fn test_degenerate_dimensions_have_zero_eccentricity() {
        assert_eq!(OrbitDimensions::default().eccentricity(), Real::ZERO);
    }

    #[test]
    fn test_circular_orbit_is_constant_radius() {
        let orbit = circular(AU, OrbitOrientation::default());
        for step in 0..20 {
            let state = orbit.state_at(Real::ONE, Real::fraction(step, 20)).unwrap();
            assert_eq!(state.radius, AU, "circular radius drifted at step {step}");
            let r = length(state.position);
            assert!(
                (r - AU.to_f64()).abs() < AU.to_f64() * 1e-6,
                "at step {step}, r={r}"
            );
        }
    }

    #[test]
    fn test_earth_like_orbit_returns_after_one_year() {
        let orbit = OrbitalElements::from_dimensions(
            OrbitDimensions {
                periapsis: Real::from_int(147_095_000_000),
                apoapsis: Real::from_int(152_100_000_000),
                clearance: Real::from_int(160_000_000_000),
            },
            OrbitOrientation::default(),
        );
        let start = orbit.state_at(Real::ONE, Real::ZERO).unwrap();
        let quarter = orbit.state_at(Real::ONE, Real::fraction(1, 4)).unwrap();
        let moved = length([
            quarter.position[0] - start.position[0],
            quarter.position[1] - start.position[1],
            quarter.position[2] - start.position[2],
        ]);
        assert!(moved > 1e11, "moved {moved}");

        let year = orbit.state_at(Real::ONE, Real::ONE).unwrap();
        let back = length([
            year.position[0] - start.position[0],
            year.position[1] - start.position[1],
            year.position[2] - start.position[2],
        ]);
        assert!(back < AU.to_f64() * 0.001, "return distance {back}");
    }

    #[test]
    fn test_flat_orbit_stays_in_plane() {
        let orientation = OrbitOrientation {
            longitude_of_ascending_node: Real::ONE,
            argument_of_periapsis: Real::TWO,
            ..OrbitOrientation::default()
        };
        let state = circular(AU, orientation)
            .state_at(Real::ONE, Real::fraction(1, 3))
            .unwrap();
        assert_eq!(state.position[2], Real::ZERO);
    }

    #[test]
    fn test_polar_orbit_leaves_plane() {
        let orientation = OrbitOrientation {
            inclination: Real::HALF_PI,
            mean_anomaly_at_epoch: Real::HALF_PI,
            ..OrbitOrientation::default()
        };
        let state = circular(AU, orientation).state_at(Real::ONE, Real::ZERO).unwrap();
        let z = state.position[2].to_f64();
        assert!((z - AU.to_f64()).abs() < AU.to_f64() * 1e-6, "z = {z}");
    }

    #[test]
    fn test_state_propagates_axis_errors() {
        let orbit = circular(Real::ZERO, OrbitOrientation::default());
        assert_eq!(
            orbit.state_at(Real::ONE, Real::ZERO),
            Err(OrbitError::NonPositiveAxis(Real::ZERO))
        );
    }
}
