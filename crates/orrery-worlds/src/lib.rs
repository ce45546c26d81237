//! Planets and moons: world classes, luminosity and habitable zones,
//! sequential orbit layout, spin, and whole-system assembly.
//!
//! Everything here is a pure function of a star or planet seed. The only
//! ordering dependency is the clearance chain inside
//! [`StarSystem::generate`], where each orbit starts beyond the previous one.

mod class;
mod error;
mod layout;
mod luminosity;
mod moon;
mod planet;
mod spin;
mod system;

pub use class::{Era, WorldClass};
pub use error::WorldError;
pub use layout::{moon_inclination, moon_orbit, orientation, planet_inclination, planet_orbit};
pub use luminosity::{HabitableZone, luminosity};
pub use moon::{has_ring, moon_class, moon_count, moon_mass, moon_scale, moon_seed};
pub use planet::{RankBand, planet_class, planet_count, planet_seed, world_mass};
pub use spin::{AxisAngles, SpinState, spin};
pub use system::{Moon, Planet, StarSystem};
