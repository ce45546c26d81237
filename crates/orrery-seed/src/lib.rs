//! Deterministic seed hash chain for Orrery.
//!
//! A [`Seed`] is a 256-bit value. Child seeds come from hashing the parent
//! together with a [`Label`]; every random property of the universe is read
//! off a seed reached by a fixed path of labels from the root.

mod label;
mod seed;

pub use label::Label;
pub use seed::{SEED_BYTES, Seed};
