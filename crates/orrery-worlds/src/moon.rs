//! Moons and rings.

use orrery_math::Real;
use orrery_math::units::EARTH_MASS;
use orrery_seed::Seed;

use crate::planet::{ClassTable, lookup, world_mass};
use crate::{Era, WorldClass, WorldError};

/// Assumed bulk density of a planet, kg/m^3.
const BULK_DENSITY: i128 = 5_500;

/// Heaviest moon relative to its planet.
const MAX_MASS_RATIO: (i128, i128) = (1, 20);

/// Roche factor applied to the planet's radius.
fn roche_factor() -> Real {
    Real::fraction(244, 100)
}

/// Number of moons around a planet of `class`.
///
/// Classic systems have no moons. Classes without a moon table (belts,
/// comets, rings and asteroids) always get zero.
pub fn moon_count(planet_seed: &Seed, class: WorldClass, era: Era) -> u32 {
    if !era.has_moons() {
        return 0;
    }
    let (count, size, bonus) = match class {
        WorldClass::Lunar | WorldClass::Europan => (1, 4, -1),
        WorldClass::Terrestrial | WorldClass::Panthalassic => (2, 3, -2),
        WorldClass::Neptunian => (2, 4, -2),
        WorldClass::Jovian => (2, 5, -2),
        _ => return 0,
    };
    let rolled = planet_seed.derive("mooncount").dice_roll(count, size, bonus);
    rolled.max(0) as u32
}

/// Seed of moon `index` around the planet.
pub fn moon_seed(planet_seed: &Seed, index: u32) -> Seed {
    planet_seed.derive(index)
}

/// Whether moon `index` of a planet of `parent` class is a ring.
///
/// Only giants grow rings, only the innermost moon slot can hold one, and
/// then only one time in ten.
pub fn has_ring(moon_seed: &Seed, parent: WorldClass, index: u32) -> bool {
    parent.is_giant() && index == 0 && moon_seed.derive("ring").get_int_between(0, 100) < 10
}

const LUNAR_MOONS: ClassTable = &[
    (85, WorldClass::Lunar),
    (90, WorldClass::Europan),
    (100, WorldClass::Asteroidal),
];

const EUROPAN_MOONS: ClassTable = &[
    (80, WorldClass::Europan),
    (90, WorldClass::Lunar),
    (100, WorldClass::Cometary),
];

const TERRESTRIAL_MOONS: ClassTable = &[
    (65, WorldClass::Lunar),
    (75, WorldClass::Europan),
    (80, WorldClass::Terrestrial),
    (100, WorldClass::Asteroidal),
];

const NEPTUNIAN_MOONS: ClassTable = &[
    (45, WorldClass::Europan),
    (60, WorldClass::Lunar),
    (65, WorldClass::Panthalassic),
    (80, WorldClass::Cometary),
    (100, WorldClass::Asteroidal),
];

const JOVIAN_MOONS: ClassTable = &[
    (30, WorldClass::Lunar),
    (55, WorldClass::Europan),
    (60, WorldClass::Terrestrial),
    (65, WorldClass::Panthalassic),
    (85, WorldClass::Asteroidal),
    (100, WorldClass::Cometary),
];

/// Class of moon `index` out of `total` around a planet of `parent` class.
///
/// Rings are decided first. Each parent has its own table, led by moons of
/// its own kind, with icy moons possible around rock and rock around ice.
/// The outer half of the moons roll 20 higher, toward captured bodies.
pub fn moon_class(
    moon_seed: &Seed,
    parent: WorldClass,
    index: u32,
    total: u32,
) -> Result<WorldClass, WorldError> {
    let table = match parent {
        WorldClass::Lunar => LUNAR_MOONS,
        WorldClass::Europan => EUROPAN_MOONS,
        WorldClass::Terrestrial | WorldClass::Panthalassic => TERRESTRIAL_MOONS,
        WorldClass::Neptunian => NEPTUNIAN_MOONS,
        WorldClass::Jovian => JOVIAN_MOONS,
        _ => return Err(WorldError::NoMoons(parent)),
    };
    if has_ring(moon_seed, parent, index) {
        return Ok(WorldClass::Ring);
    }
    let mut roll = moon_seed.derive("class").get_int_between(0, 100);
    if index * 2 >= total && total > 1 {
        roll += 20;
    }
    Ok(lookup(table, roll))
}

/// Mass of a moon of `class` in Earth masses, drawn like a planet's but
/// never more than a twentieth of `planet_mass`.
pub fn moon_mass(moon_seed: &Seed, class: WorldClass, planet_mass: Real) -> Real {
    let (numerator, denominator) = MAX_MASS_RATIO;
    world_mass(moon_seed, class).min(planet_mass * Real::fraction(numerator, denominator))
}

/// Distance unit for laying out a planet's moons, in meters.
///
/// The radius of a sphere of the planet's mass at an assumed bulk density,
/// times the Roche factor. `planet_mass` is in Earth masses.
pub fn moon_scale(planet_mass: Real) -> Result<Real, WorldError> {
    let volume = EARTH_MASS / Real::from_int(BULK_DENSITY) * planet_mass;
    let ball = volume * Real::from_int(3) / (Real::from_int(4) * Real::PI);
    let radius = ball.pow(Real::fraction(1, 3))?;
    Ok(radius * roche_factor())
}
