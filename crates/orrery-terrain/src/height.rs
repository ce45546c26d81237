//! Midpoint-displacement terrain height.

use orrery_math::Real;
use orrery_seed::Seed;

use crate::TrixelAddress;

/// Seed of the root triangle `root` of a world's terrain.
pub fn terrain_seed(world_seed: &Seed, root: u8) -> Seed {
    world_seed.derive("terrain").derive(root)
}

/// Height of the trixel at `address`, in `[-1, 1]`.
///
/// Level `k` of the address contributes a uniform offset in `[-1, 1)`
/// scaled by `2^-(k + 1)`, drawn from the node reached by the first `k`
/// child indices. A child therefore differs from its parent by less than
/// `2^-(depth + 1)`. Siblings share every offset above their own level but
/// neighbours across a parent edge or a root edge are not reconciled, so
/// deep trixels can show seams there.
pub fn terrain_height(world_seed: &Seed, address: &TrixelAddress) -> Real {
    let mut node = terrain_seed(world_seed, address.root());
    let mut height = offset(&node, 0);
    for (level, child) in address.path().enumerate() {
        node = node.derive(child);
        height += offset(&node, level as u32 + 1);
    }
    height
}

fn offset(node: &Seed, level: u32) -> Real {
    node.derive("height").get_real_between(-Real::ONE, Real::ONE) >> (level + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> Seed {
        Seed::from_phrase("fred").derive("world")
    }

    #[test]
    fn test_height_is_bounded() {
        let world = world();
        for root in 0..8 {
            let mut address = TrixelAddress::root_of(root).unwrap();
            for level in 0..TrixelAddress::MAX_DEPTH {
                address = address.child(level % 4).unwrap();
                let height = terrain_height(&world, &address);
                assert!(
                    height >= -Real::ONE && height <= Real::ONE,
                    "height {height} at {address}"
                );
            }
        }
    }

    #[test]
    fn test_child_stays_near_parent() {
        let world = world();
        let parent = TrixelAddress::new(3, &[2, 1, 0, 3]).unwrap();
        let base = terrain_height(&world, &parent);
        let bound = Real::ONE >> (u32::from(parent.depth()) + 2);
        for child in parent.children().unwrap() {
            let step = (terrain_height(&world, &child) - base).abs();
            assert!(step <= bound, "child {child} moved {step} from its parent");
        }
    }

    #[test]
    fn test_height_is_deterministic_and_varies() {
        let world = world();
        let a = TrixelAddress::new(0, &[1, 1, 1]).unwrap();
        let b = TrixelAddress::new(0, &[1, 1, 2]).unwrap();
        assert_eq!(terrain_height(&world, &a), terrain_height(&world, &a));
        assert_ne!(terrain_height(&world, &a), terrain_height(&world, &b));
    }

    #[test]
    fn test_worlds_have_different_terrain() {
        let address = TrixelAddress::root_of(4).unwrap();
        let other = Seed::from_phrase("fred").derive("other world");
        assert_ne!(terrain_height(&world(), &address), terrain_height(&other, &address));
    }
}
