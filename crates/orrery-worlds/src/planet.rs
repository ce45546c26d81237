//! Planet count, class and mass.

use orrery_math::Real;
use orrery_seed::Seed;
use orrery_stars::{ObjectClass, SpectralType, StarError};

use crate::{Era, WorldClass, WorldError};

/// Exclusive upper bounds on a 0..100 roll.
pub(crate) type ClassTable = &'static [(i128, WorldClass)];

const MODERN_FIRST: ClassTable = &[
    (60, WorldClass::Lunar),
    (70, WorldClass::Terrestrial),
    (75, WorldClass::Panthalassic),
    (85, WorldClass::Neptunian),
    (100, WorldClass::Jovian),
];

const MODERN_INNER: ClassTable = &[
    (20, WorldClass::Lunar),
    (50, WorldClass::Terrestrial),
    (60, WorldClass::Panthalassic),
    (70, WorldClass::Neptunian),
    (80, WorldClass::Jovian),
    (100, WorldClass::AsteroidBelt),
];

const MODERN_OUTER: ClassTable = &[
    (5, WorldClass::Lunar),
    (25, WorldClass::Europan),
    (35, WorldClass::Terrestrial),
    (40, WorldClass::Panthalassic),
    (60, WorldClass::Neptunian),
    (80, WorldClass::Jovian),
    (90, WorldClass::AsteroidBelt),
    (100, WorldClass::Cometary),
];

const CLASSIC_FIRST: ClassTable = &[
    (70, WorldClass::Lunar),
    (90, WorldClass::Terrestrial),
    (100, WorldClass::Jovian),
];

const CLASSIC_INNER: ClassTable = &[
    (30, WorldClass::Lunar),
    (70, WorldClass::Terrestrial),
    (90, WorldClass::Jovian),
    (100, WorldClass::AsteroidBelt),
];

const CLASSIC_OUTER: ClassTable = &[
    (10, WorldClass::Lunar),
    (25, WorldClass::Terrestrial),
    (65, WorldClass::Jovian),
    (85, WorldClass::AsteroidBelt),
    (100, WorldClass::Cometary),
];

/// First class whose bound lies above `roll`; the last entry catches the rest.
pub(crate) fn lookup(table: ClassTable, roll: i128) -> WorldClass {
    table
        .iter()
        .find(|(bound, _)| roll < *bound)
        .or(table.last())
        .map_or(WorldClass::Lunar, |&(_, class)| class)
}

/// Position of a planet relative to its siblings, which picks its table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankBand {
    /// The innermost planet of a multi-planet system.
    First,
    /// The inner half of the system.
    Inner,
    /// The outer half.
    Outer,
}

impl RankBand {
    /// Band of planet `index` in a system of `total`.
    pub fn of(index: u32, total: u32) -> Result<RankBand, WorldError> {
        if index >= total {
            return Err(WorldError::PlanetIndexOutOfRange { index, total });
        }
        Ok(if index == 0 && total != 1 {
            RankBand::First
        } else if index * 2 < total {
            RankBand::Inner
        } else {
            RankBand::Outer
        })
    }
}

fn planet_ceiling(class: ObjectClass, spectral_type: SpectralType) -> Result<i128, StarError> {
    let ceiling = match (class, spectral_type) {
        (ObjectClass::MainSequence, SpectralType::NotApplicable) => {
            return Err(StarError::SpectralTypeMismatch {
                class,
                spectral_type,
            });
        }
        (ObjectClass::MainSequence, SpectralType::TypeO | SpectralType::TypeB) => 5,
        (ObjectClass::MainSequence, SpectralType::TypeA) => 7,
        (ObjectClass::MainSequence, SpectralType::TypeM) => 14,
        (ObjectClass::MainSequence, _) => 12,
        (ObjectClass::Giant | ObjectClass::Supergiant, _) => 4,
        _ => 2,
    };
    Ok(ceiling)
}

/// Number of planets, uniform in `[1, ceiling]` where the ceiling widens for
/// cooler main-sequence stars.
pub fn planet_count(
    star_seed: &Seed,
    class: ObjectClass,
    spectral_type: SpectralType,
) -> Result<u32, WorldError> {
    let ceiling = planet_ceiling(class, spectral_type)?;
    let count = star_seed.derive("planetcount").get_int_between(1, ceiling + 1);
    Ok(count as u32)
}

/// Seed of planet `index` around the star.
pub fn planet_seed(star_seed: &Seed, index: u32) -> Seed {
    star_seed.derive(index)
}

/// Class of planet `index` out of `total`.
///
/// The modern era takes the smaller of two independent rolls, which pulls
/// results toward the top of each table.
pub fn planet_class(
    planet_seed: &Seed,
    index: u32,
    total: u32,
    era: Era,
) -> Result<WorldClass, WorldError> {
    let band = RankBand::of(index, total)?;
    let first = planet_seed.derive("classroll1").get_int_between(0, 100);
    let (roll, table) = match era {
        Era::Classic => (
            first,
            match band {
                RankBand::First => CLASSIC_FIRST,
                RankBand::Inner => CLASSIC_INNER,
                RankBand::Outer => CLASSIC_OUTER,
            },
        ),
        Era::Modern => (
            first.min(planet_seed.derive("classroll2").get_int_between(0, 100)),
            match band {
                RankBand::First => MODERN_FIRST,
                RankBand::Inner => MODERN_INNER,
                RankBand::Outer => MODERN_OUTER,
            },
        ),
    };
    Ok(lookup(table, roll))
}

/// Mass bounds in Earth masses as `(numerator, denominator)` pairs.
fn mass_bounds(class: WorldClass) -> ((i128, i128), (i128, i128)) {
    match class {
        WorldClass::Asteroidal => ((1, 1_000_000), (1, 10_000)),
        WorldClass::Lunar | WorldClass::Europan => ((1, 100), (9, 100)),
        WorldClass::Terrestrial | WorldClass::Panthalassic => ((1, 10), (9, 1)),
        WorldClass::Neptunian => ((7, 1), (20, 1)),
        WorldClass::Jovian => ((50, 1), (400, 1)),
        WorldClass::Cometary => ((1, 10_000_000), (1, 1_000_000)),
        WorldClass::AsteroidBelt => ((1, 10_000), (1, 100)),
        WorldClass::Ring => ((1, 1_000_000_000), (1, 10_000_000)),
    }
}

/// Mass in Earth masses, uniform within the class bounds.
pub fn world_mass(world_seed: &Seed, class: WorldClass) -> Real {
    let ((low_n, low_d), (high_n, high_d)) = mass_bounds(class);
    world_seed
        .derive("mass")
        .get_real_between(Real::fraction(low_n, low_d), Real::fraction(high_n, high_d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> Seed {
        Seed::from_phrase("fred").derive("system")
    }

    #[test]
    fn test_lookup_uses_exclusive_bounds() {
        assert_eq!(lookup(MODERN_FIRST, 59), WorldClass::Lunar);
        assert_eq!(lookup(MODERN_FIRST, 60), WorldClass::Terrestrial);
        assert_eq!(lookup(MODERN_FIRST, 99), WorldClass::Jovian);
        assert_eq!(lookup(CLASSIC_OUTER, 150), WorldClass::Cometary);
    }

    #[test]
    fn test_rank_bands() {
        assert_eq!(RankBand::of(0, 8), Ok(RankBand::First));
        assert_eq!(RankBand::of(3, 8), Ok(RankBand::Inner));
        assert_eq!(RankBand::of(4, 8), Ok(RankBand::Outer));
        assert_eq!(RankBand::of(0, 1), Ok(RankBand::Inner), "a lone planet is inner");
        assert_eq!(
            RankBand::of(8, 8),
            Err(WorldError::PlanetIndexOutOfRange { index: 8, total: 8 })
        );
    }

    #[test]
    fn test_planet_count_respects_ceiling() {
        for index in 0u64..100 {
            let seed = star().derive(index);
            let dwarf =
                planet_count(&seed, ObjectClass::MainSequence, SpectralType::TypeM).unwrap();
            assert!((1..=14).contains(&dwarf), "M dwarf with {dwarf} planets");
            let remnant =
                planet_count(&seed, ObjectClass::WhiteDwarf, SpectralType::NotApplicable).unwrap();
            assert!((1..=2).contains(&remnant), "white dwarf with {remnant} planets");
        }
    }

    #[test]
    fn test_planet_count_rejects_untyped_main_sequence() {
        assert!(matches!(
            planet_count(&star(), ObjectClass::MainSequence, SpectralType::NotApplicable),
            Err(WorldError::Star(StarError::SpectralTypeMismatch { .. }))
        ));
    }

    #[test]
    fn test_classic_era_uses_classic_classes() {
        let classic = [
            WorldClass::Lunar,
            WorldClass::Terrestrial,
            WorldClass::Jovian,
            WorldClass::AsteroidBelt,
            WorldClass::Cometary,
        ];
        for index in 0..12 {
            let seed = planet_seed(&star(), index);
            let class = planet_class(&seed, index, 12, Era::Classic).unwrap();
            assert!(classic.contains(&class), "{class:?} is not a classic class");
        }
    }

    #[test]
    fn test_first_planet_is_never_a_belt() {
        for index in 0u64..200 {
            let seed = star().derive(index);
            let class = planet_class(&seed, 0, 6, Era::Modern).unwrap();
            assert_ne!(class, WorldClass::AsteroidBelt);
            assert_ne!(class, WorldClass::Cometary);
        }
    }

    #[test]
    fn test_modern_minimum_roll_favours_small_worlds() {
        let lunar = (0u64..400)
            .filter(|&index| {
                let seed = star().derive(index);
                planet_class(&seed, 0, 6, Era::Modern).unwrap() == WorldClass::Lunar
            })
            .count();
        // P(min of two rolls < 60) = 0.84
        assert!(lunar > 300, "only {lunar}/400 first planets are lunar");
    }

    #[test]
    fn test_world_mass_bounds() {
        for index in 0u64..100 {
            let seed = star().derive(index);
            let jovian = world_mass(&seed, WorldClass::Jovian);
            assert!(jovian >= Real::from_int(50) && jovian < Real::from_int(400));
            let ring = world_mass(&seed, WorldClass::Ring);
            assert!(ring > Real::ZERO && ring < Real::fraction(1, 10_000_000));
        }
    }
}
