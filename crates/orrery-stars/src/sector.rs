//! Galaxy sectors: addressing, seeds, density and object counts.
//!
//! The galaxy is a grid of cubic sectors 25 light years on a side, centred on
//! sector (0, 0, 0). `y` is the axis perpendicular to the galactic disk.

use orrery_math::Real;
use orrery_seed::Seed;
use serde::{Deserialize, Serialize};

use crate::StarError;

/// Largest absolute sector coordinate on any axis.
pub const MAX_SECTOR: i32 = 10_000;

/// Edge length of a sector in light years.
pub const SECTOR_SIZE_LIGHT_YEARS: i128 = 25;

/// Radius of the dense central sphere, in sectors.
const CORE_RADIUS: i64 = 200;
/// Radius of the galactic disk, in sectors.
const DISK_RADIUS: i64 = 2_000;
/// Half thickness of the galactic disk, in sectors.
const DISK_HALF_HEIGHT: i64 = 40;

const CORE_DENSITY: (i128, i128) = (9, 10);
const DISK_DENSITY: (i128, i128) = (5, 10);
const HALO_DENSITY: (i128, i128) = (1, 60);

/// Dice pool for the undiluted object count of a sector.
const OBJECT_DICE: (u32, u32) = (3, 50);

/// Address of one sector, always within `±MAX_SECTOR` on every axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSector")]
pub struct SectorCoord {
    x: i16,
    y: i16,
    z: i16,
}

/// Unchecked serialised form of a [`SectorCoord`].
#[derive(Deserialize)]
struct RawSector {
    x: i32,
    y: i32,
    z: i32,
}

impl TryFrom<RawSector> for SectorCoord {
    type Error = StarError;

    fn try_from(raw: RawSector) -> Result<Self, Self::Error> {
        SectorCoord::new(raw.x, raw.y, raw.z)
    }
}

impl SectorCoord {
    /// The galactic centre.
    pub const ORIGIN: SectorCoord = SectorCoord { x: 0, y: 0, z: 0 };

    /// Validate and build a sector address.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, StarError> {
        let bounded = |value: i32| {
            if value.unsigned_abs() <= MAX_SECTOR.unsigned_abs() {
                i16::try_from(value).ok()
            } else {
                None
            }
        };
        match (bounded(x), bounded(y), bounded(z)) {
            (Some(x), Some(y), Some(z)) => Ok(Self { x, y, z }),
            _ => Err(StarError::SectorOutOfBounds { x, y, z }),
        }
    }

    #[must_use]
    pub fn x(self) -> i16 {
        self.x
    }

    /// Position along the axis perpendicular to the disk.
    #[must_use]
    pub fn y(self) -> i16 {
        self.y
    }

    #[must_use]
    pub fn z(self) -> i16 {
        self.z
    }

    /// Squared distance from the galactic centre, in sectors².
    #[must_use]
    pub fn distance_squared(self) -> i64 {
        let (x, y, z) = (self.x as i64, self.y as i64, self.z as i64);
        x * x + y * y + z * z
    }
}

/// Seed of a sector: `root / x / y / z`.
pub fn sector_seed(root: &Seed, coord: SectorCoord) -> Seed {
    root.derive(coord.x).derive(coord.y).derive(coord.z)
}

/// Seed of the `index`th object of a sector.
pub fn object_seed(sector_seed: &Seed, index: u64) -> Seed {
    sector_seed.derive(index)
}

/// Fraction of the maximum object count a sector actually holds.
///
/// Three regions, tested with squared distances only: a central sphere,
/// a flattened disk around it, and the sparse halo everywhere else.
pub fn galaxy_density(coord: SectorCoord) -> Real {
    let (numerator, denominator) = if coord.distance_squared() <= CORE_RADIUS * CORE_RADIUS {
        CORE_DENSITY
    } else {
        let (x, y, z) = (coord.x as i64, coord.y as i64, coord.z as i64);
        let in_disk = x * x + z * z <= DISK_RADIUS * DISK_RADIUS && y.abs() <= DISK_HALF_HEIGHT;
        if in_disk { DISK_DENSITY } else { HALO_DENSITY }
    };
    Real::fraction(numerator, denominator)
}

/// Number of objects in a sector: `round(3d50 × density)`.
pub fn sector_object_count(root: &Seed, coord: SectorCoord) -> u64 {
    let (count, size) = OBJECT_DICE;
    let roll = sector_seed(root, coord)
        .derive("objectcount")
        .dice_roll(count, size, 0);
    let objects = (Real::from_int(roll) * galaxy_density(coord)).round();
    tracing::trace!(?coord, roll, objects = objects.to_int() as u64, "sector object count");
    objects.to_int() as u64
}
