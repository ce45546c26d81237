//! Per-object star properties, each read from a labelled child of the
//! object seed.

use orrery_math::Real;
use orrery_seed::Seed;
use serde::{Deserialize, Serialize};

use crate::class::check_pairing;
use crate::sector::SECTOR_SIZE_LIGHT_YEARS;
use crate::{ObjectClass, SpectralType, StarError};

/// Cumulative thresholds on a 1..=10000 roll, rarest class first.
const CLASS_TABLE: [(i128, ObjectClass); 5] = [
    (1, ObjectClass::BlackHole),
    (3, ObjectClass::NeutronStar),
    (700, ObjectClass::WhiteDwarf),
    (9_900, ObjectClass::MainSequence),
    (9_999, ObjectClass::Giant),
];

/// Cumulative thresholds on a 1..=10000 roll for main-sequence stars.
const SPECTRAL_TABLE: [(i128, SpectralType); 6] = [
    (1, SpectralType::TypeO),
    (14, SpectralType::TypeB),
    (74, SpectralType::TypeA),
    (374, SpectralType::TypeF),
    (1_134, SpectralType::TypeG),
    (2_344, SpectralType::TypeK),
];

/// Mass bounds in hundredths of a solar mass.
fn mass_bounds(class: ObjectClass, spectral_type: SpectralType) -> (i128, i128) {
    match (class, spectral_type) {
        (ObjectClass::MainSequence, SpectralType::TypeO) => (1_600, 9_000),
        (ObjectClass::MainSequence, SpectralType::TypeB) => (210, 1_600),
        (ObjectClass::MainSequence, SpectralType::TypeA) => (140, 210),
        (ObjectClass::MainSequence, SpectralType::TypeF) => (104, 140),
        (ObjectClass::MainSequence, SpectralType::TypeG) => (80, 104),
        (ObjectClass::MainSequence, SpectralType::TypeK) => (45, 80),
        (ObjectClass::MainSequence, _) => (8, 45),
        (ObjectClass::Giant, _) => (80, 800),
        (ObjectClass::Supergiant, _) => (800, 4_000),
        (ObjectClass::WhiteDwarf, _) => (17, 133),
        (ObjectClass::NeutronStar, _) => (110, 216),
        (ObjectClass::BlackHole, _) => (500, 5_000),
    }
}

/// Chance out of 1000 that an object has planets.
fn planet_threshold(class: ObjectClass, spectral_type: SpectralType) -> i128 {
    match (class, spectral_type) {
        (ObjectClass::MainSequence, SpectralType::TypeO | SpectralType::TypeB) => 1,
        (ObjectClass::MainSequence, SpectralType::TypeA) => 500,
        (ObjectClass::MainSequence, SpectralType::TypeM) => 634,
        (ObjectClass::MainSequence, _) => 990,
        (ObjectClass::Giant, _) => 90,
        (ObjectClass::Supergiant, _) => 50,
        _ => 70,
    }
}

/// Object class from a 1..=10000 roll on `"class"`.
pub fn object_class(object_seed: &Seed) -> ObjectClass {
    let roll = object_seed.derive("class").get_int_between(1, 10_001);
    CLASS_TABLE
        .iter()
        .find(|(ceiling, _)| roll <= *ceiling)
        .map_or(ObjectClass::Supergiant, |&(_, class)| class)
}

/// Spectral type for main-sequence stars, [`SpectralType::NotApplicable`]
/// for every other class.
pub fn spectral_type(object_seed: &Seed, class: ObjectClass) -> SpectralType {
    if class != ObjectClass::MainSequence {
        return SpectralType::NotApplicable;
    }
    let roll = object_seed.derive("type").get_int_between(1, 10_001);
    SPECTRAL_TABLE
        .iter()
        .find(|(ceiling, _)| roll <= *ceiling)
        .map_or(SpectralType::TypeM, |&(_, spectral_type)| spectral_type)
}

/// Mass in solar masses, uniform within the bounds of the class and type.
pub fn star_mass(
    object_seed: &Seed,
    class: ObjectClass,
    spectral_type: SpectralType,
) -> Result<Real, StarError> {
    check_pairing(class, spectral_type)?;
    let (low, high) = mass_bounds(class, spectral_type);
    Ok(object_seed
        .derive("mass")
        .get_real_between(Real::fraction(low, 100), Real::fraction(high, 100)))
}

/// Position within the sector in light years, each axis in `[0, 25)`.
pub fn position(object_seed: &Seed) -> [Real; 3] {
    let size = Real::from_int(SECTOR_SIZE_LIGHT_YEARS);
    ["x", "y", "z"].map(|axis| object_seed.derive(axis).get_real_between(Real::ZERO, size))
}

/// Whether the object hosts a planetary system.
pub fn has_planets(
    object_seed: &Seed,
    class: ObjectClass,
    spectral_type: SpectralType,
) -> Result<bool, StarError> {
    check_pairing(class, spectral_type)?;
    let roll = object_seed.derive("hasplanets").get_int_between(0, 1_000);
    Ok(roll < planet_threshold(class, spectral_type))
}

/// Every star-level property of one object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    pub seed: Seed,
    pub class: ObjectClass,
    pub spectral_type: SpectralType,
    /// Solar masses.
    pub mass: Real,
    /// Light years from the sector's minimum corner.
    pub position: [Real; 3],
    pub has_planets: bool,
}

impl Star {
    /// Generate the object addressed by `object_seed`.
    pub fn generate(object_seed: Seed) -> Result<Star, StarError> {
        let class = object_class(&object_seed);
        let spectral_type = spectral_type(&object_seed, class);
        let star = Star {
            seed: object_seed,
            class,
            spectral_type,
            mass: star_mass(&object_seed, class, spectral_type)?,
            position: position(&object_seed),
            has_planets: has_planets(&object_seed, class, spectral_type)?,
        };
        tracing::trace!(
            seed = %star.seed,
            class = ?star.class,
            spectral_type = ?star.spectral_type,
            mass = %star.mass,
            has_planets = star.has_planets,
            "generated star"
        );
        Ok(star)
    }
}
