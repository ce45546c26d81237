//! Rotation of planets and moons.

use orrery_math::Real;
use orrery_seed::Seed;
use serde::{Deserialize, Serialize};

/// Fastest spin rate generated, in radians per Julian year (about a
/// two-hour day).
const MAX_SPIN_RATE: i128 = 5_000;

/// Orientation of the spin axis, in radians.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisAngles {
    /// Tilt of the axis away from the orbit normal, in `[0, π)`.
    pub obliquity: Real,
    /// Direction of the tilt around the orbit normal, in `[0, 2π)`.
    pub azimuth: Real,
}

/// How a world turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinState {
    /// Always shows the same face to its primary. The spin rate is the
    /// orbital mean motion and the axis is the orbit normal; callers derive
    /// both from the orbit.
    TidallyLocked,
    /// Independent rotation.
    Free {
        axis: AxisAngles,
        /// Radians per Julian year.
        rate: Real,
    },
}

impl SpinState {
    #[must_use]
    pub fn is_tidally_locked(&self) -> bool {
        matches!(self, SpinState::TidallyLocked)
    }
}

/// Spin of the world at orbital `rank` (0 for the innermost).
///
/// The chance of tidal lock is `1 / (rank + 2)`: half of innermost worlds,
/// falling off outward. Free rotators usually tilt less than π/6; one in ten
/// may tilt up to π.
pub fn spin(world_seed: &Seed, rank: u32) -> SpinState {
    let lock_chance = Real::ONE / Real::from_int(rank as i128 + 2);
    if world_seed.derive("tidallock").get_real() < lock_chance {
        return SpinState::TidallyLocked;
    }

    let extreme = world_seed.derive("extremetilt").get_int_between(0, 10) == 0;
    let tilt_bound = if extreme {
        Real::PI
    } else {
        Real::PI / Real::from_int(6)
    };
    let axis = AxisAngles {
        obliquity: world_seed
            .derive("obliquity")
            .get_real_between(Real::ZERO, tilt_bound),
        azimuth: world_seed
            .derive("azimuth")
            .get_real_between(Real::ZERO, Real::TWO_PI),
    };
    let rate = world_seed
        .derive("spinrate")
        .get_real_between(Real::ZERO, Real::from_int(MAX_SPIN_RATE));
    SpinState::Free { axis, rate }
}
