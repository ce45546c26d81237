//! Whole-generator properties over many sectors.

use orrery::math::units::AU;
use orrery::orbit::mean_angular_motion;
use orrery::terrain::terrain_height;
use orrery::{Era, Real, SectorCoord, Seed, TrixelAddress, Universe, WorldClass};

#[test]
fn test_density_regions() {
    let universe = Universe::new(Seed::from_phrase("fred"), Era::Modern);
    let coord = |x, y, z| SectorCoord::new(x, y, z).unwrap();
    assert_eq!(universe.galaxy_density(SectorCoord::ORIGIN), Real::fraction(9, 10));
    assert_eq!(universe.galaxy_density(coord(201, 0, 0)), Real::fraction(5, 10));
    assert_eq!(universe.galaxy_density(coord(0, 0, 1_999)), Real::fraction(5, 10));
    assert_eq!(universe.galaxy_density(coord(300, 41, 0)), Real::fraction(1, 60));
    assert_eq!(universe.galaxy_density(coord(9_000, 0, 9_000)), Real::fraction(1, 60));
}

#[test]
fn test_halo_sectors_are_sparse() {
    let universe = Universe::new(Seed::from_phrase("fred"), Era::Modern);
    let halo = SectorCoord::new(5_000, 5_000, 5_000).unwrap();
    // at most round(150 / 60)
    assert!(universe.sector_object_count(halo) <= 3);
}

#[test]
fn test_orbit_ordering_sweep() {
    for era in [Era::Modern, Era::Classic] {
        let universe = Universe::new(Seed::from_phrase("fred"), era);
        for x in -2..=2 {
            let coord = SectorCoord::new(x, 1, 0).unwrap();
            for index in 0..universe.sector_object_count(coord) {
                let Some(system) = universe.system(coord, index).unwrap() else {
                    continue;
                };
                for pair in system.planets.windows(2) {
                    assert!(
                        pair[0].orbit.clearance <= pair[1].orbit.periapsis,
                        "{era:?} sector {x} object {index}: planet {} overlaps {}",
                        pair[0].index,
                        pair[1].index
                    );
                }
                for planet in &system.planets {
                    assert_ne!(planet.class, WorldClass::Ring, "rings never orbit stars");
                    assert!(planet.orbit.eccentricity < Real::ONE);
                    for pair in planet.moons.windows(2) {
                        assert!(pair[0].orbit.clearance <= pair[1].orbit.periapsis);
                    }
                }
            }
        }
    }
}

#[test]
fn test_earth_mean_motion() {
    let axis = Real::from_int(149_598_023_000);
    let motion = mean_angular_motion(Real::ONE, axis).unwrap();
    let error = (motion - Real::TWO_PI).abs();
    assert!(error < Real::fraction(2, 100), "mean motion {motion} rad/yr");
}

#[test]
fn test_one_year_returns_earth_to_start() {
    let axis = AU;
    let motion = mean_angular_motion(Real::ONE, axis).unwrap();
    let after_a_year = (Real::ZERO + motion).rem_euclid(Real::TWO_PI);
    let drift = after_a_year.min(Real::TWO_PI - after_a_year);
    assert!(drift < Real::fraction(2, 100), "drift {drift} rad");
}

#[test]
fn test_terrain_continuity() {
    let world = Seed::from_phrase("fred").derive("terrain world");
    let mut address = TrixelAddress::root_of(3).unwrap();
    for level in 0..TrixelAddress::MAX_DEPTH {
        let parent_height = terrain_height(&world, &address);
        let bound = Real::ONE >> u32::from(address.depth());
        for child in address.children().unwrap() {
            let step = (terrain_height(&world, &child) - parent_height).abs();
            assert!(step <= bound, "depth {level}: step {step} exceeds {bound}");
        }
        address = address.child(level % 4).unwrap();
    }
}
