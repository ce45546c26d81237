//! 88.40 fixed-point arithmetic, transcendental functions, and physical unit constants for Orrery.
//!
//! Every continuous quantity the generators produce is a [`Real`]: a signed
//! 128-bit integer holding the value scaled by 2⁴⁰. Nothing in this crate
//! touches floating point on a computation path, so two evaluators on any
//! platform produce the same bits.

mod error;
mod fixed_point;
mod transcendental;
mod wide;

pub mod units;

pub use error::MathError;
pub use fixed_point::{FRAC_BITS, Real};
pub use transcendental::{ATAN_ITERATIONS, EXP_ITERATIONS, LN_ITERATIONS, SIN_ITERATIONS};
