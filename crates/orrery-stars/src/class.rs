//! Closed star-level enumerations and their stable ordinals.

use serde::{Deserialize, Serialize};

use crate::StarError;

/// Kind of stellar object. Ordinals are stable and cross API boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum ObjectClass {
    Supergiant = 0,
    Giant = 1,
    MainSequence = 2,
    WhiteDwarf = 3,
    NeutronStar = 4,
    BlackHole = 5,
}

impl ObjectClass {
    /// All classes in ordinal order.
    pub const ALL: [ObjectClass; 6] = [
        ObjectClass::Supergiant,
        ObjectClass::Giant,
        ObjectClass::MainSequence,
        ObjectClass::WhiteDwarf,
        ObjectClass::NeutronStar,
        ObjectClass::BlackHole,
    ];

    /// Stellar remnants: white dwarfs, neutron stars and black holes.
    #[must_use]
    pub fn is_remnant(self) -> bool {
        matches!(
            self,
            ObjectClass::WhiteDwarf | ObjectClass::NeutronStar | ObjectClass::BlackHole
        )
    }
}

impl From<ObjectClass> for u8 {
    fn from(class: ObjectClass) -> u8 {
        class as u8
    }
}

impl TryFrom<u8> for ObjectClass {
    type Error = StarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ObjectClass::ALL
            .get(value as usize)
            .copied()
            .ok_or(StarError::InvalidOrdinal {
                kind: "object class",
                value,
            })
    }
}

/// Harvard spectral type of a main-sequence star.
///
/// Every other object class carries [`SpectralType::NotApplicable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum SpectralType {
    TypeO = 0,
    TypeB = 1,
    TypeA = 2,
    TypeF = 3,
    TypeG = 4,
    TypeK = 5,
    TypeM = 6,
    NotApplicable = 7,
}

impl SpectralType {
    /// All spectral types in ordinal order.
    pub const ALL: [SpectralType; 8] = [
        SpectralType::TypeO,
        SpectralType::TypeB,
        SpectralType::TypeA,
        SpectralType::TypeF,
        SpectralType::TypeG,
        SpectralType::TypeK,
        SpectralType::TypeM,
        SpectralType::NotApplicable,
    ];
}

impl From<SpectralType> for u8 {
    fn from(spectral_type: SpectralType) -> u8 {
        spectral_type as u8
    }
}

impl TryFrom<u8> for SpectralType {
    type Error = StarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        SpectralType::ALL
            .get(value as usize)
            .copied()
            .ok_or(StarError::InvalidOrdinal {
                kind: "spectral type",
                value,
            })
    }
}

/// Check that `spectral_type` is meaningful for `class`.
pub(crate) fn check_pairing(
    class: ObjectClass,
    spectral_type: SpectralType,
) -> Result<(), StarError> {
    let main_sequence = class == ObjectClass::MainSequence;
    let typed = spectral_type != SpectralType::NotApplicable;
    if main_sequence == typed {
        Ok(())
    } else {
        Err(StarError::SpectralTypeMismatch {
            class,
            spectral_type,
        })
    }
}
