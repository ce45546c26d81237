//! World classes and generator eras.

use serde::{Deserialize, Serialize};

use crate::WorldError;

/// Kind of planet or moon. Ordinals are stable and cross API boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum WorldClass {
    /// Rubble too small to pull itself round.
    Asteroidal = 0,
    /// Airless rock, Moon or Mercury sized.
    Lunar = 1,
    /// Rocky world with an atmosphere.
    Terrestrial = 2,
    /// Gas giant.
    Jovian = 3,
    /// Icy body on a long, eccentric orbit.
    Cometary = 4,
    /// Ice shell over a subsurface ocean.
    Europan = 5,
    /// Global ocean world.
    Panthalassic = 6,
    /// Ice giant.
    Neptunian = 7,
    /// Planetary ring; only ever a moon.
    Ring = 8,
    /// Belt of small bodies sharing one orbit; only ever a planet.
    AsteroidBelt = 9,
}

impl WorldClass {
    /// All classes in ordinal order.
    pub const ALL: [WorldClass; 10] = [
        WorldClass::Asteroidal,
        WorldClass::Lunar,
        WorldClass::Terrestrial,
        WorldClass::Jovian,
        WorldClass::Cometary,
        WorldClass::Europan,
        WorldClass::Panthalassic,
        WorldClass::Neptunian,
        WorldClass::Ring,
        WorldClass::AsteroidBelt,
    ];

    /// Small bodies that end up around a planet by capture rather than
    /// forming there.
    #[must_use]
    pub fn is_captured_body(self) -> bool {
        matches!(self, WorldClass::Asteroidal | WorldClass::Cometary)
    }

    /// Gas and ice giants.
    #[must_use]
    pub fn is_giant(self) -> bool {
        matches!(self, WorldClass::Jovian | WorldClass::Neptunian)
    }
}

impl From<WorldClass> for u8 {
    fn from(class: WorldClass) -> u8 {
        class as u8
    }
}

impl TryFrom<u8> for WorldClass {
    type Error = WorldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        WorldClass::ALL
            .get(value as usize)
            .copied()
            .ok_or(WorldError::InvalidOrdinal {
                kind: "world class",
                value,
            })
    }
}

/// Rule set used to generate systems.
///
/// `Classic` is the original generator: one roll per rank band, only the
/// Lunar, Terrestrial, Jovian, AsteroidBelt and Cometary classes, and no
/// moons. `Modern` takes the minimum of two rolls per band, adds the
/// Europan, Panthalassic, Neptunian and Ring classes, and generates moons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    Classic,
    #[default]
    Modern,
}

impl Era {
    /// Whether planets in this era carry moons.
    #[must_use]
    pub fn has_moons(self) -> bool {
        self == Era::Modern
    }
}
