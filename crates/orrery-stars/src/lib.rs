//! Star-level generation: galaxy sectors, object density, and the class,
//! spectral type, mass, position and planet flag of every object in a sector.

mod class;
mod error;
mod sector;
mod star;

pub use class::{ObjectClass, SpectralType};
pub use error::StarError;
pub use sector::{
    MAX_SECTOR, SECTOR_SIZE_LIGHT_YEARS, SectorCoord, galaxy_density, object_seed,
    sector_object_count, sector_seed,
};
pub use star::{Star, has_planets, object_class, position, spectral_type, star_mass};
