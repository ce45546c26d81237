//! Advisory cache of derived object seeds.

use dashmap::DashMap;
use orrery_seed::Seed;
use orrery_stars::SectorCoord;

/// Key of one cached seed: the root it descends from and its derivation
/// path below that root.
pub type SeedKey = (Seed, SectorCoord, u64);

/// Concurrent cache of object seeds.
///
/// An entry never changes once written, since the seed is a pure function
/// of its key. Once `max_entries` is reached new seeds are simply not
/// stored; nothing is evicted. Concurrent misses racing past the check can
/// overshoot the bound by at most one entry per thread.
pub struct SeedCache {
    entries: DashMap<SeedKey, Seed>,
    max_entries: usize,
}

impl SeedCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries,
        }
    }

    /// The cached seed for `key`, computing and possibly storing it on a
    /// miss.
    pub fn get_or_derive(&self, key: SeedKey, derive: impl FnOnce() -> Seed) -> Seed {
        if let Some(seed) = self.entries.get(&key) {
            return *seed;
        }
        let seed = derive();
        if self.entries.len() < self.max_entries {
            self.entries.insert(key, seed);
        }
        seed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}
