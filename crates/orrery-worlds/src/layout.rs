//! Sequential orbit layout and orbital-plane orientation.
//!
//! Orbits are laid out from the inside out. Each orbit starts at the
//! previous orbit's clearance plus a random offset, so no two orbits around
//! the same body overlap.

use orrery_math::Real;
use orrery_orbit::{OrbitDimensions, OrbitOrientation};
use orrery_seed::Seed;

use crate::{WorldClass, WorldError};

/// A closed range `[low, high)` stored as two `(numerator, denominator)`
/// fractions of the layout scale.
type Span = ((i128, i128), (i128, i128));

/// Random offset, width and margin of one class of orbit.
struct OrbitTable {
    offset: Span,
    width: Span,
    margin: Span,
}

const ROCKY_ORBIT: OrbitTable = OrbitTable {
    offset: ((1, 10), (1, 2)),
    width: ((0, 1), (1, 10)),
    margin: ((1, 10), (1, 3)),
};

const NEPTUNIAN_ORBIT: OrbitTable = OrbitTable {
    offset: ((1, 2), (2, 1)),
    width: ((0, 1), (1, 5)),
    margin: ((1, 2), (3, 2)),
};

const JOVIAN_ORBIT: OrbitTable = OrbitTable {
    offset: ((1, 2), (2, 1)),
    width: ((0, 1), (1, 5)),
    margin: ((1, 1), (2, 1)),
};

const BELT_ORBIT: OrbitTable = OrbitTable {
    offset: ((1, 5), (1, 1)),
    width: ((1, 2), (3, 2)),
    margin: ((1, 10), (1, 2)),
};

const COMETARY_ORBIT: OrbitTable = OrbitTable {
    offset: ((1, 1), (5, 1)),
    width: ((2, 1), (20, 1)),
    margin: ((1, 2), (1, 1)),
};

const RING_ORBIT: OrbitTable = OrbitTable {
    offset: ((1, 2), (3, 4)),
    width: ((1, 20), (1, 4)),
    margin: ((1, 10), (1, 2)),
};

const REGULAR_MOON_ORBIT: OrbitTable = OrbitTable {
    offset: ((2, 1), (10, 1)),
    width: ((0, 1), (1, 2)),
    margin: ((1, 1), (5, 1)),
};

/// Captured bodies sit far out on stretched orbits.
const CAPTURED_MOON_ORBIT: OrbitTable = OrbitTable {
    offset: ((5, 1), (50, 1)),
    width: ((5, 1), (40, 1)),
    margin: ((2, 1), (10, 1)),
};

fn draw(
    seed: &Seed,
    label: &str,
    ((low_n, low_d), (high_n, high_d)): Span,
    scale: Real,
) -> Real {
    let fraction = seed
        .derive(label)
        .get_real_between(Real::fraction(low_n, low_d), Real::fraction(high_n, high_d));
    scale * fraction
}

fn lay_out(
    seed: &Seed,
    table: &OrbitTable,
    previous_clearance: Real,
    scale: Real,
) -> OrbitDimensions {
    let periapsis = previous_clearance + draw(seed, "periapsis", table.offset, scale);
    let apoapsis = periapsis + draw(seed, "apoapsis", table.width, scale);
    let clearance = apoapsis + draw(seed, "clearance", table.margin, scale);
    OrbitDimensions {
        periapsis,
        apoapsis,
        clearance,
    }
}

/// Orbit of a planet around its star, in meters.
///
/// `scale` is the habitable-zone layout scale of the star and
/// `previous_clearance` the clearance of the next planet inward (zero for
/// the first).
pub fn planet_orbit(
    planet_seed: &Seed,
    class: WorldClass,
    previous_clearance: Real,
    scale: Real,
) -> Result<OrbitDimensions, WorldError> {
    let table = match class {
        WorldClass::Lunar
        | WorldClass::Terrestrial
        | WorldClass::Europan
        | WorldClass::Panthalassic
        | WorldClass::Asteroidal => &ROCKY_ORBIT,
        WorldClass::Neptunian => &NEPTUNIAN_ORBIT,
        WorldClass::Jovian => &JOVIAN_ORBIT,
        WorldClass::AsteroidBelt => &BELT_ORBIT,
        WorldClass::Cometary => &COMETARY_ORBIT,
        WorldClass::Ring => return Err(WorldError::NoOrbitTable(class)),
    };
    Ok(lay_out(planet_seed, table, previous_clearance, scale))
}

/// Orbit of a moon around its planet, in meters, relative to the planet's
/// moon scale.
pub fn moon_orbit(
    moon_seed: &Seed,
    class: WorldClass,
    previous_clearance: Real,
    moon_scale: Real,
) -> Result<OrbitDimensions, WorldError> {
    let table = match class {
        WorldClass::Ring => &RING_ORBIT,
        WorldClass::Asteroidal | WorldClass::Cometary => &CAPTURED_MOON_ORBIT,
        WorldClass::AsteroidBelt => return Err(WorldError::NoOrbitTable(class)),
        _ => &REGULAR_MOON_ORBIT,
    };
    Ok(lay_out(moon_seed, table, previous_clearance, moon_scale))
}

fn milliradians(seed: &Seed, bound: i128) -> Real {
    let value = seed.derive("inclination").get_int_between(0, bound);
    Real::fraction(value, 1_000)
}

/// Inclination of a planet's orbit to its star's equator.
///
/// Small worlds scatter more than giants; comets may orbit at any angle.
/// Two percent of orbits are retrograde, adding π.
pub fn planet_inclination(planet_seed: &Seed, class: WorldClass) -> Real {
    let bound = match class {
        WorldClass::Lunar | WorldClass::Europan => 175,
        WorldClass::Terrestrial | WorldClass::Panthalassic => 87,
        WorldClass::Neptunian => 35,
        WorldClass::Jovian => 52,
        WorldClass::Cometary => 3_142,
        _ => 280,
    };
    let inclination = milliradians(planet_seed, bound);
    if planet_seed.derive("retrograde").get_int_between(1, 101) < 3 {
        inclination + Real::PI
    } else {
        inclination
    }
}

/// Inclination of a moon's orbit to its planet's equator.
///
/// Rings lie in the equator and never run backwards. Regular moons are
/// retrograde five percent of the time; captured bodies toss a coin.
pub fn moon_inclination(moon_seed: &Seed, class: WorldClass) -> Real {
    let (bound, retrograde) = match class {
        WorldClass::Ring => (10, false),
        WorldClass::Asteroidal | WorldClass::Cometary => {
            (1_571, moon_seed.derive("retrograde").get_bool())
        }
        _ => (
            87,
            moon_seed.derive("retrograde").get_int_between(0, 100) < 5,
        ),
    };
    let inclination = milliradians(moon_seed, bound);
    if retrograde {
        inclination + Real::PI
    } else {
        inclination
    }
}

/// Node, periapsis argument and epoch phase, each uniform in `[0, 2π)`.
pub fn orientation(world_seed: &Seed, inclination: Real) -> OrbitOrientation {
    let angle = |label: &str| {
        world_seed
            .derive(label)
            .get_real_between(Real::ZERO, Real::TWO_PI)
    };
    OrbitOrientation {
        inclination,
        longitude_of_ascending_node: angle("lan"),
        argument_of_periapsis: angle("aop"),
        mean_anomaly_at_epoch: angle("meananomaly"),
    }
}
