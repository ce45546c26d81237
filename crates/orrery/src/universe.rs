//! The query interface over one generated universe.

use orrery_config::Config;
use orrery_math::Real;
use orrery_seed::Seed;
use orrery_stars::{SectorCoord, Star};
use orrery_terrain::TrixelAddress;
use orrery_worlds::{Era, StarSystem};

use crate::UniverseError;
use crate::cache::SeedCache;

/// A universe fixed by its root seed and rule set.
///
/// Every query is a pure function of the root, the era and its arguments.
/// The only state is an optional seed cache, which never changes a result.
/// `Universe` is `Sync`; share it across threads by reference.
pub struct Universe {
    root: Seed,
    era: Era,
    cache: Option<SeedCache>,
}

impl Universe {
    /// A universe without a seed cache.
    pub fn new(root: Seed, era: Era) -> Self {
        Self {
            root,
            era,
            cache: None,
        }
    }

    /// A universe caching up to `max_entries` object seeds.
    pub fn with_cache(root: Seed, era: Era, max_entries: usize) -> Self {
        Self {
            root,
            era,
            cache: Some(SeedCache::new(max_entries)),
        }
    }

    /// The universe described by `config`.
    pub fn from_config(config: &Config) -> Self {
        let root = config.root_seed();
        let era = config.universe.era;
        tracing::info!(%root, ?era, cache = config.cache.enabled, "opened universe");
        if config.cache.enabled {
            Self::with_cache(root, era, config.cache.max_entries)
        } else {
            Self::new(root, era)
        }
    }

    #[must_use]
    pub fn root(&self) -> Seed {
        self.root
    }

    #[must_use]
    pub fn era(&self) -> Era {
        self.era
    }

    /// Number of cached object seeds.
    #[must_use]
    pub fn cached_seeds(&self) -> usize {
        self.cache.as_ref().map_or(0, SeedCache::len)
    }

    pub fn sector_seed(&self, coord: SectorCoord) -> Seed {
        orrery_stars::sector_seed(&self.root, coord)
    }

    /// Seed of object `index` in the sector, whether or not it exists.
    pub fn object_seed(&self, coord: SectorCoord, index: u64) -> Seed {
        let derive = || orrery_stars::object_seed(&self.sector_seed(coord), index);
        match &self.cache {
            Some(cache) => cache.get_or_derive((self.root, coord, index), derive),
            None => derive(),
        }
    }

    pub fn galaxy_density(&self, coord: SectorCoord) -> Real {
        orrery_stars::galaxy_density(coord)
    }

    pub fn sector_object_count(&self, coord: SectorCoord) -> u64 {
        orrery_stars::sector_object_count(&self.root, coord)
    }

    /// Object `index` of the sector.
    ///
    /// Indices at or beyond [`Self::sector_object_count`] name objects that
    /// do not exist and are rejected.
    pub fn star(&self, coord: SectorCoord, index: u64) -> Result<Star, UniverseError> {
        let count = self.sector_object_count(coord);
        if index >= count {
            return Err(UniverseError::ObjectIndexOutOfRange { index, count });
        }
        Ok(Star::generate(self.object_seed(coord, index))?)
    }

    /// Every object in the sector, in index order.
    pub fn sector_stars(&self, coord: SectorCoord) -> Result<Vec<Star>, UniverseError> {
        let count = self.sector_object_count(coord);
        (0..count)
            .map(|index| {
                Star::generate(self.object_seed(coord, index)).map_err(UniverseError::from)
            })
            .collect()
    }

    /// The planetary system of object `index`, or `None` if it has no
    /// planets.
    pub fn system(
        &self,
        coord: SectorCoord,
        index: u64,
    ) -> Result<Option<StarSystem>, UniverseError> {
        let star = self.star(coord, index)?;
        if !star.has_planets {
            return Ok(None);
        }
        Ok(Some(StarSystem::from_star(&star, self.era)?))
    }

    /// Surface height of the world with `world_seed` at `address`, in `[-1, 1]`.
    pub fn terrain_height(&self, world_seed: &Seed, address: &TrixelAddress) -> Real {
        orrery_terrain::terrain_height(world_seed, address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fred() -> Universe {
        Universe::with_cache(Seed::from_phrase("fred"), Era::Modern, 1_024)
    }

    #[test]
    fn test_cache_does_not_change_seeds() {
        let cached = fred();
        let plain = Universe::new(Seed::from_phrase("fred"), Era::Modern);
        let coord = SectorCoord::new(1, -2, 3).unwrap();
        for index in 0..10 {
            assert_eq!(cached.object_seed(coord, index), plain.object_seed(coord, index));
            assert_eq!(cached.object_seed(coord, index), plain.object_seed(coord, index));
        }
        assert_eq!(cached.cached_seeds(), 10);
        assert_eq!(plain.cached_seeds(), 0);
    }

    #[test]
    fn test_star_index_is_bounded_by_count() {
        let universe = fred();
        let count = universe.sector_object_count(SectorCoord::ORIGIN);
        assert!(universe.star(SectorCoord::ORIGIN, count - 1).is_ok());
        assert_eq!(
            universe.star(SectorCoord::ORIGIN, count),
            Err(UniverseError::ObjectIndexOutOfRange { index: count, count })
        );
    }

    #[test]
    fn test_sector_stars_match_single_queries() {
        let universe = fred();
        let stars = universe.sector_stars(SectorCoord::ORIGIN).unwrap();
        assert_eq!(stars.len() as u64, universe.sector_object_count(SectorCoord::ORIGIN));
        assert_eq!(stars[2], universe.star(SectorCoord::ORIGIN, 2).unwrap());
    }

    #[test]
    fn test_system_matches_planet_flag() {
        let universe = fred();
        for index in 0..universe.sector_object_count(SectorCoord::ORIGIN) {
            let star = universe.star(SectorCoord::ORIGIN, index).unwrap();
            let system = universe.system(SectorCoord::ORIGIN, index).unwrap();
            assert_eq!(system.is_some(), star.has_planets, "object {index}");
        }
    }

    #[test]
    fn test_from_config_honours_cache_setting() {
        let mut config = Config::default();
        config.cache.enabled = false;
        let universe = Universe::from_config(&config);
        universe.object_seed(SectorCoord::ORIGIN, 0);
        assert_eq!(universe.cached_seeds(), 0);
        assert_eq!(universe.root(), Seed::from_phrase("fred"));
        assert_eq!(universe.era(), Era::Modern);
    }
}
