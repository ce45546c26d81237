//! Surface terrain: hierarchical triangle ("trixel") addresses and the
//! midpoint-displacement height at each of them.

mod error;
mod height;
mod trixel;

pub use error::TrixelError;
pub use height::{terrain_height, terrain_seed};
pub use trixel::TrixelAddress;
