//! Deterministic procedural universe generation.
//!
//! A [`Universe`] is fixed by a root seed and an [`Era`]. From those it
//! derives, on demand and without stored state, every sector, star, planet,
//! moon and terrain height of a galaxy, bit-identically on every machine.
//! The generator crates are re-exported for callers that need lower-level
//! access.
//!
//! ```no_run
//! use orrery::{Config, SectorCoord, Universe};
//!
//! let universe = Universe::from_config(&Config::default());
//! let origin = SectorCoord::ORIGIN;
//! for index in 0..universe.sector_object_count(origin) {
//!     if let Some(system) = universe.system(origin, index)? {
//!         println!("{index}: {} planets", system.planets.len());
//!     }
//! }
//! # Ok::<(), orrery::UniverseError>(())
//! ```

mod cache;
mod error;
mod universe;

pub use cache::{SeedCache, SeedKey};
pub use error::UniverseError;
pub use universe::Universe;

pub use orrery_config::Config;
pub use orrery_math::Real;
pub use orrery_seed::Seed;
pub use orrery_stars::{ObjectClass, SectorCoord, SpectralType, Star};
pub use orrery_terrain::TrixelAddress;
pub use orrery_worlds::{Era, Moon, Planet, StarSystem, WorldClass};

pub use orrery_config as config;
pub use orrery_math as math;
pub use orrery_orbit as orbit;
pub use orrery_seed as seed;
pub use orrery_stars as stars;
pub use orrery_terrain as terrain;
pub use orrery_worlds as worlds;
