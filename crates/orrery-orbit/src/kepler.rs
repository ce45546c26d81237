//! Mean motion and Kepler's equation.
//!
//! Angles are radians, distances meters, masses solar masses and times
//! Julian years throughout.

use orrery_math::Real;
use orrery_math::units::{JULIAN_YEAR, SOLAR_MU};

use crate::OrbitError;

/// Newton iterations allowed when solving Kepler's equation.
pub const KEPLER_ITERATIONS: u32 = 10;

/// Residual below which the Kepler solver stops: 2⁻³⁰ radians.
pub const KEPLER_EPSILON: Real = Real::from_raw(1 << 10);

/// Mean angular motion `sqrt(G·M / a³)` in radians per Julian year.
///
/// `G·M` is formed first, divided by the axis, and rooted to the circular
/// orbital speed; the remaining `1/a` is applied after scaling seconds to
/// years so distant orbits keep their precision.
pub fn mean_angular_motion(
    central_mass_sols: Real,
    semimajor_axis: Real,
) -> Result<Real, OrbitError> {
    if semimajor_axis <= Real::ZERO {
        return Err(OrbitError::NonPositiveAxis(semimajor_axis));
    }
    let speed = (SOLAR_MU * central_mass_sols / semimajor_axis).sqrt()?;
    Ok(speed * JULIAN_YEAR / semimajor_axis)
}

/// Mean anomaly after `elapsed_years`, wrapped into `[0, 2π)`.
pub fn mean_anomaly(at_epoch: Real, motion: Real, elapsed_years: Real) -> Real {
    (at_epoch + motion * elapsed_years).rem_euclid(Real::TWO_PI)
}

/// Solve `M = E − e·sin E` for the eccentric anomaly `E`.
///
/// Starts from the third-order series
/// `M + e sin M + e²/2 sin 2M + e³/8 (3 sin 3M − sin M)` and refines with
/// Newton's method for at most [`KEPLER_ITERATIONS`] steps. When the
/// residual does not drop below [`KEPLER_EPSILON`] the last iterate is
/// returned as is.
pub fn eccentric_anomaly(mean_anomaly: Real, eccentricity: Real) -> Real {
    let m = mean_anomaly;
    let e = eccentricity;
    let e2 = e * e;
    let e3 = e2 * e;
    let sin_m = m.sin();

    let mut estimate = m
        + e * sin_m
        + (e2 * Real::HALF) * (m * Real::TWO).sin()
        + (e3 / Real::from_int(8))
            * (Real::from_int(3) * (m * Real::from_int(3)).sin() - sin_m);

    for _ in 0..KEPLER_ITERATIONS {
        let residual = estimate - e * estimate.sin() - m;
        if residual.abs() < KEPLER_EPSILON {
            break;
        }
        let derivative = Real::ONE - e * estimate.cos();
        if derivative == Real::ZERO {
            break;
        }
        estimate -= residual / derivative;
    }
    estimate
}

/// True anomaly from the eccentric anomaly:
/// `2·atan2(√(1+e)·sin(E/2), √(1−e)·cos(E/2))`.
pub fn true_anomaly(eccentric_anomaly: Real, eccentricity: Real) -> Result<Real, OrbitError> {
    if eccentricity.is_negative() || eccentricity >= Real::ONE {
        return Err(OrbitError::OpenOrbit(eccentricity));
    }
    let half = eccentric_anomaly * Real::HALF;
    let y = (Real::ONE + eccentricity).sqrt()? * half.sin();
    let x = (Real::ONE - eccentricity).sqrt()? * half.cos();
    let angle = Real::atan2(y, x);
    Ok(angle + angle)
}

/// Distance from the focus: `a·(1 − e·cos E)`.
pub fn orbital_radius(semimajor_axis: Real, eccentricity: Real, eccentric_anomaly: Real) -> Real {
    semimajor_axis * (Real::ONE - eccentricity * eccentric_anomaly.cos())
}

/// Orbital period in Julian years.
pub fn orbital_period(central_mass_sols: Real, semimajor_axis: Real) -> Result<Real, OrbitError> {
    let motion = mean_angular_motion(central_mass_sols, semimajor_axis)?;
    Real::TWO_PI.checked_div(motion).ok_or(OrbitError::NoMotion)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Real, expected: f64, tolerance: f64, what: &str) {
        let value = actual.to_f64();
        assert!(
            (value - expected).abs() < tolerance,
            "{what}: expected {expected}, got {value}"
        );
    }

    fn earth_axis() -> Real {
        Real::from_int(149_598_023_000)
    }

    #[test]
    fn test_earth_mean_motion_is_one_turn_per_year() {
        let motion = mean_angular_motion(Real::ONE, earth_axis()).unwrap();
        assert!(
            (motion - Real::TWO_PI).abs() < Real::fraction(2, 100),
            "mean motion {motion} is not within 0.02 of 2π"
        );
    }

    #[test]
    fn test_mean_motion_scales_with_mass() {
        let light = mean_angular_motion(Real::ONE, earth_axis()).unwrap();
        let heavy = mean_angular_motion(Real::from_int(4), earth_axis()).unwrap();
        assert_close(heavy / light, 2.0, 1e-9, "doubling with 4x mass");
    }

    #[test]
    fn test_mean_motion_rejects_non_positive_axis() {
        assert_eq!(
            mean_angular_motion(Real::ONE, Real::ZERO),
            Err(OrbitError::NonPositiveAxis(Real::ZERO))
        );
        assert!(mean_angular_motion(Real::ONE, -Real::ONE).is_err());
    }

    #[test]
    fn test_period_of_earth() {
        let period = orbital_period(Real::ONE, earth_axis()).unwrap();
        assert_close(period, 1.0, 1e-3, "Earth period in years");
        assert_eq!(orbital_period(Real::ZERO, earth_axis()), Err(OrbitError::NoMotion));
    }

    #[test]
    fn test_mean_anomaly_wraps() {
        let wrapped = mean_anomaly(Real::ONE, Real::TWO_PI, Real::from_int(3));
        assert_eq!(wrapped, Real::ONE);
        let negative = mean_anomaly(Real::ZERO, -Real::ONE, Real::ONE);
        assert!(negative >= Real::ZERO && negative < Real::TWO_PI);
        assert_eq!(negative, Real::TWO_PI - Real::ONE);
    }

    #[test]
    fn test_circular_orbit_anomaly_is_mean_anomaly() {
        let m = Real::fraction(7, 5);
        assert_eq!(eccentric_anomaly(m, Real::ZERO), m);
    }

    #[test]
    fn test_kepler_residual_is_small() {
        for (m, e) in [(1, 50), (3, 20), (5, 90), (0, 70)] {
            let m = Real::from_int(m);
            let e = Real::fraction(e, 100);
            let anomaly = eccentric_anomaly(m, e);
            let residual = anomaly - e * anomaly.sin() - m;
            assert!(
                residual.abs() < Real::fraction(1, 1_000_000),
                "residual {residual} for M={m}, e={e}"
            );
        }
    }

    #[test]
    fn test_true_anomaly() {
        let e = Real::fraction(1, 2);
        assert_eq!(true_anomaly(Real::ZERO, e), Ok(Real::ZERO));
        let nu = true_anomaly(Real::HALF_PI, e).unwrap();
        // cos ν = (cos E − e) / (1 − e cos E) = −1/2 at E = π/2
        assert_close(nu, 2.0 * std::f64::consts::FRAC_PI_3, 1e-9, "true anomaly");
        assert_eq!(
            true_anomaly(Real::ONE, Real::ONE),
            Err(OrbitError::OpenOrbit(Real::ONE))
        );
    }

    #[test]
    fn test_orbital_radius_at_apsides() {
        let a = Real::from_int(2);
        let e = Real::HALF;
        assert_close(orbital_radius(a, e, Real::ZERO), 1.0, 1e-9, "periapsis");
        assert_close(orbital_radius(a, e, Real::PI), 3.0, 1e-9, "apoapsis");
    }
}
