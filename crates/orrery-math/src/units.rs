//! Physical constants and unit conversions.
//!
//! Distances are metres, times are Julian years or seconds, masses are solar
//! or Earth masses depending on the generation level. The integer constants
//! are exact; the [`Real`] forms are the same values scaled by 2⁴⁰.

use crate::Real;

/// 1 Astronomical Unit = 149,597,870,700 meters
/// (IAU 2012 exact definition)
pub const METERS_PER_AU: i128 = 149_597_870_700;

/// 1 light-year = 9,460,730,472,580,800 meters
/// (IAU definition: Julian year × c)
pub const METERS_PER_LIGHT_YEAR: i128 = 9_460_730_472_580_800;

/// 1 Julian year = 365.25 days = 31,557,600 seconds
pub const SECONDS_PER_JULIAN_YEAR: i128 = 31_557_600;

/// Heliocentric gravitational constant G·M☉ = 1.32712440018×10²⁰ m³/s²
pub const SOLAR_GRAVITATIONAL_PARAMETER: i128 = 132_712_440_018_000_000_000;

/// Earth mass ≈ 5.9722×10²⁴ kg
pub const EARTH_MASS_KG: i128 = 5_972_200_000_000_000_000_000_000;

/// Earth masses per solar mass (1.98847×10³⁰ kg / 5.9722×10²⁴ kg).
pub const EARTH_MASSES_PER_SOLAR_MASS: i128 = 332_950;

/// [`METERS_PER_AU`] as a [`Real`].
pub const AU: Real = Real::from_int(METERS_PER_AU);

/// [`METERS_PER_LIGHT_YEAR`] as a [`Real`].
pub const LIGHT_YEAR: Real = Real::from_int(METERS_PER_LIGHT_YEAR);

/// [`SECONDS_PER_JULIAN_YEAR`] as a [`Real`].
pub const JULIAN_YEAR: Real = Real::from_int(SECONDS_PER_JULIAN_YEAR);

/// [`SOLAR_GRAVITATIONAL_PARAMETER`] as a [`Real`].
pub const SOLAR_MU: Real = Real::from_int(SOLAR_GRAVITATIONAL_PARAMETER);

/// [`EARTH_MASS_KG`] as a [`Real`].
pub const EARTH_MASS: Real = Real::from_int(EARTH_MASS_KG);

/// Convert astronomical units to meters.
pub fn au_to_meters(au: Real) -> Real {
    au * AU
}

/// Convert meters to astronomical units.
pub fn meters_to_au(meters: Real) -> Real {
    meters / AU
}

/// Convert light-years to meters.
pub fn light_years_to_meters(light_years: Real) -> Real {
    light_years * LIGHT_YEAR
}

/// Convert Earth masses to solar masses.
pub fn earth_masses_to_solar(earth_masses: Real) -> Real {
    earth_masses / Real::from_int(EARTH_MASSES_PER_SOLAR_MASS)
}

/// Format a distance in meters as a human-readable string, choosing the
/// most appropriate unit. Presentation only.
///
/// Examples:
/// - 1_500 m -> "1.500 km"
/// - 2 AU -> "2.000 AU"
pub fn format_distance(meters: Real) -> String {
    let sign = if meters.is_negative() { "-" } else { "" };
    let magnitude = meters.abs();

    if magnitude >= LIGHT_YEAR {
        format!("{sign}{:.3} ly", (magnitude / LIGHT_YEAR).to_f64())
    } else if magnitude >= AU / Real::from_int(100) {
        format!("{sign}{:.3} AU", (magnitude / AU).to_f64())
    } else if magnitude >= Real::from_int(1_000) {
        format!("{sign}{:.3} km", magnitude.to_f64() / 1_000.0)
    } else {
        format!("{sign}{:.3} m", magnitude.to_f64())
    }
}
