//! Stellar luminosity and the habitable zone it defines.

use orrery_math::Real;
use orrery_math::units::AU;
use orrery_seed::Seed;
use orrery_stars::ObjectClass;
use serde::{Deserialize, Serialize};

use crate::WorldError;

/// Mass-luminosity exponent for ordinary stars.
fn mass_luminosity_exponent() -> Real {
    Real::fraction(7, 2)
}

/// Luminosity in solar luminosities.
///
/// Ordinary stars follow `L = M^3.5`. White dwarfs glow at a small random
/// fraction of their mass, neutron stars at a level unrelated to mass, and
/// black holes are dark unless a coin flip grants them an accretion disk.
/// Every result is then perturbed by up to ±5 %.
pub fn luminosity(
    star_seed: &Seed,
    class: ObjectClass,
    mass_sols: Real,
) -> Result<Real, WorldError> {
    let base = match class {
        ObjectClass::BlackHole => {
            if star_seed.derive("accretiondisk").get_bool() {
                star_seed
                    .derive("disk")
                    .get_real_between(Real::ONE, Real::from_int(100))
            } else {
                Real::ZERO
            }
        }
        ObjectClass::NeutronStar => star_seed
            .derive("luminosity")
            .get_real_between(Real::fraction(5, 100), Real::fraction(20, 100)),
        ObjectClass::WhiteDwarf => {
            mass_sols
                * star_seed
                    .derive("luminosity")
                    .get_real_between(Real::fraction(1, 10_000), Real::fraction(1, 100))
        }
        _ => mass_sols.pow(mass_luminosity_exponent())?,
    };
    let scale = star_seed
        .derive("luminosityscale")
        .get_real_between(Real::fraction(95, 100), Real::fraction(105, 100));
    Ok(base * scale)
}

/// Annulus of orbital distance, in meters, where liquid water is plausible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitableZone {
    pub inner: Real,
    pub outer: Real,
}

impl HabitableZone {
    /// `[0.75 AU, 2 AU]` scaled by `sqrt(L)`.
    pub fn from_luminosity(luminosity: Real) -> Result<Self, WorldError> {
        let root = luminosity.sqrt()?;
        Ok(Self {
            inner: AU * Real::fraction(3, 4) * root,
            outer: AU * Real::TWO * root,
        })
    }

    /// Midpoint of the zone.
    #[must_use]
    pub fn center(&self) -> Real {
        (self.inner + self.outer) * Real::HALF
    }

    /// Distance unit for laying out planets: the zone's midpoint, never
    /// below a tenth of an AU so dark primaries still get ordered orbits.
    #[must_use]
    pub fn layout_scale(&self) -> Real {
        self.center().max(AU / Real::from_int(10))
    }

    /// Whether `distance` lies inside the zone.
    #[must_use]
    pub fn contains(&self, distance: Real) -> bool {
        distance >= self.inner && distance <= self.outer
    }
}
