//! Whole-system assembly: every planet and moon around one star.

use orrery_math::Real;
use orrery_math::units::earth_masses_to_solar;
use orrery_orbit::{OrbitalElements, OrbitalState};
use orrery_seed::Seed;
use orrery_stars::{ObjectClass, SpectralType, Star};
use serde::{Deserialize, Serialize};

use crate::layout::{moon_inclination, moon_orbit, orientation, planet_inclination, planet_orbit};
use crate::luminosity::{HabitableZone, luminosity};
use crate::moon::{moon_class, moon_count, moon_mass, moon_scale, moon_seed};
use crate::planet::{planet_class, planet_count, planet_seed, world_mass};
use crate::spin::{SpinState, spin};
use crate::{Era, WorldClass, WorldError};

/// A moon or ring around a planet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moon {
    pub index: u32,
    pub seed: Seed,
    pub class: WorldClass,
    /// Earth masses.
    pub mass: Real,
    /// Relative to the planet, in meters.
    pub orbit: OrbitalElements,
    pub spin: SpinState,
}

/// A planet and its moons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub index: u32,
    pub seed: Seed,
    pub class: WorldClass,
    /// Earth masses.
    pub mass: Real,
    /// Relative to the star, in meters.
    pub orbit: OrbitalElements,
    pub spin: SpinState,
    /// Ordered from the inside out. Empty in the classic era.
    pub moons: Vec<Moon>,
}

impl Moon {
    /// Spin rate in radians per year. A tidally locked moon turns once per
    /// orbit of a planet of `planet_mass` Earth masses.
    pub fn rotation_rate(&self, planet_mass: Real) -> Result<Real, WorldError> {
        match self.spin {
            SpinState::TidallyLocked => {
                Ok(self.orbit.mean_motion(earth_masses_to_solar(planet_mass))?)
            }
            SpinState::Free { rate, .. } => Ok(rate),
        }
    }
}

impl Planet {
    /// Spin rate in radians per year. A tidally locked planet turns once
    /// per orbit of a star of `star_mass` solar masses.
    pub fn rotation_rate(&self, star_mass: Real) -> Result<Real, WorldError> {
        match self.spin {
            SpinState::TidallyLocked => Ok(self.orbit.mean_motion(star_mass)?),
            SpinState::Free { rate, .. } => Ok(rate),
        }
    }

    /// Position of moon `index` relative to this planet.
    pub fn moon_state(
        &self,
        index: usize,
        elapsed_years: Real,
    ) -> Option<Result<OrbitalState, WorldError>> {
        let moon = self.moons.get(index)?;
        let parent = earth_masses_to_solar(self.mass);
        Some(
            moon.orbit
                .state_at(parent, elapsed_years)
                .map_err(WorldError::from),
        )
    }
}

/// A star with every planet and moon generated in one pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarSystem {
    pub star_seed: Seed,
    pub class: ObjectClass,
    pub spectral_type: SpectralType,
    /// Solar masses.
    pub star_mass: Real,
    pub era: Era,
    /// Solar luminosities.
    pub luminosity: Real,
    pub habitable_zone: HabitableZone,
    /// Ordered from the inside out; each periapsis lies at or beyond the
    /// previous planet's clearance.
    pub planets: Vec<Planet>,
}

impl StarSystem {
    /// Generate the system of an already generated star.
    pub fn from_star(star: &Star, era: Era) -> Result<StarSystem, WorldError> {
        Self::generate(&star.seed, star.class, star.spectral_type, star.mass, era)
    }

    /// Generate the planets and moons of a star.
    ///
    /// Orbits are laid out sequentially: each planet starts beyond the
    /// clearance of the one inside it, and each planet's moons do the same
    /// starting from the planet itself.
    pub fn generate(
        star_seed: &Seed,
        class: ObjectClass,
        spectral_type: SpectralType,
        star_mass: Real,
        era: Era,
    ) -> Result<StarSystem, WorldError> {
        let luminosity = luminosity(star_seed, class, star_mass)?;
        let habitable_zone = HabitableZone::from_luminosity(luminosity)?;
        let scale = habitable_zone.layout_scale();
        let total = planet_count(star_seed, class, spectral_type)?;

        let mut planets = Vec::with_capacity(total as usize);
        let mut clearance = Real::ZERO;
        for index in 0..total {
            let seed = planet_seed(star_seed, index);
            let world_class = planet_class(&seed, index, total, era)?;
            let dimensions = planet_orbit(&seed, world_class, clearance, scale)?;
            clearance = dimensions.clearance;
            let inclination = planet_inclination(&seed, world_class);
            let mass = world_mass(&seed, world_class);
            let moons = if era.has_moons() {
                generate_moons(&seed, world_class, mass)?
            } else {
                Vec::new()
            };
            let planet = Planet {
                index,
                seed,
                class: world_class,
                mass,
                orbit: OrbitalElements::from_dimensions(
                    dimensions,
                    orientation(&seed, inclination),
                ),
                spin: spin(&seed, index),
                moons,
            };
            tracing::debug!(
                star = %star_seed,
                index,
                class = ?planet.class,
                mass = %planet.mass,
                periapsis = %planet.orbit.periapsis,
                apoapsis = %planet.orbit.apoapsis,
                moons = planet.moons.len(),
                "generated planet"
            );
            planets.push(planet);
        }

        tracing::debug!(
            star = %star_seed,
            ?class,
            ?spectral_type,
            ?era,
            %luminosity,
            planets = planets.len(),
            "generated system"
        );
        Ok(StarSystem {
            star_seed: *star_seed,
            class,
            spectral_type,
            star_mass,
            era,
            luminosity,
            habitable_zone,
            planets,
        })
    }

    /// Position of planet `index` relative to the star.
    pub fn planet_state(
        &self,
        index: usize,
        elapsed_years: Real,
    ) -> Option<Result<OrbitalState, WorldError>> {
        let planet = self.planets.get(index)?;
        Some(
            planet
                .orbit
                .state_at(self.star_mass, elapsed_years)
                .map_err(WorldError::from),
        )
    }
}

fn generate_moons(
    planet_seed: &Seed,
    parent: WorldClass,
    planet_mass: Real,
) -> Result<Vec<Moon>, WorldError> {
    let total = moon_count(planet_seed, parent, Era::Modern);
    if total == 0 {
        return Ok(Vec::new());
    }
    let scale = moon_scale(planet_mass)?;
    let mut moons = Vec::with_capacity(total as usize);
    let mut clearance = Real::ZERO;
    for index in 0..total {
        let seed = moon_seed(planet_seed, index);
        let class = moon_class(&seed, parent, index, total)?;
        let dimensions = moon_orbit(&seed, class, clearance, scale)?;
        clearance = dimensions.clearance;
        let inclination = moon_inclination(&seed, class);
        let moon = Moon {
            index,
            seed,
            class,
            mass: moon_mass(&seed, class, planet_mass),
            orbit: OrbitalElements::from_dimensions(dimensions, orientation(&seed, inclination)),
            spin: spin(&seed, index),
        };
        tracing::trace!(
            planet = %planet_seed,
            index,
            class = ?moon.class,
            periapsis = %moon.orbit.periapsis,
            "generated moon"
        );
        moons.push(moon);
    }
    Ok(moons)
}
