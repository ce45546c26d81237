use crate::{ObjectClass, SpectralType};

/// Errors raised by star-level generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StarError {
    /// A sector coordinate lies outside `±MAX_SECTOR`.
    #[error("sector ({x}, {y}, {z}) is outside the galaxy")]
    SectorOutOfBounds { x: i32, y: i32, z: i32 },

    /// An ordinal that names no enumerator.
    #[error("invalid {kind} ordinal {value}")]
    InvalidOrdinal { kind: &'static str, value: u8 },

    /// A spectral type that does not apply to the object class, such as a
    /// main-sequence star without a type or a white dwarf with one.
    #[error("spectral type {spectral_type:?} does not apply to {class:?}")]
    SpectralTypeMismatch {
        class: ObjectClass,
        spectral_type: SpectralType,
    },
}
