//! Hierarchical triangle addresses on a world's surface.

use serde::{Deserialize, Serialize};

use crate::TrixelError;

/// A triangle on the surface of a world.
///
/// The surface starts as the 8 faces of an octahedron (`root` 0..=7). Each
/// triangle splits into 4 children (0..=3), down to [`Self::MAX_DEPTH`]
/// levels. Child indices are packed two bits per level, first level in the
/// lowest bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTrixel")]
pub struct TrixelAddress {
    root: u8,
    depth: u8,
    path: u64,
}

/// Unchecked serialised form of a [`TrixelAddress`].
#[derive(Deserialize)]
struct RawTrixel {
    root: u8,
    depth: u8,
    path: u64,
}

impl TryFrom<RawTrixel> for TrixelAddress {
    type Error = TrixelError;

    fn try_from(raw: RawTrixel) -> Result<Self, Self::Error> {
        if raw.depth > Self::MAX_DEPTH {
            return Err(TrixelError::TooDeep {
                max: Self::MAX_DEPTH,
            });
        }
        let children: Vec<u8> = (0..raw.depth)
            .map(|level| ((raw.path >> (2 * level)) & 0b11) as u8)
            .collect();
        let address = Self::new(raw.root, &children)?;
        if address.path != raw.path {
            return Err(TrixelError::PathBeyondDepth { depth: raw.depth });
        }
        Ok(address)
    }
}

impl TrixelAddress {
    /// Number of root triangles.
    pub const ROOTS: u8 = 8;

    /// Deepest subdivision level.
    pub const MAX_DEPTH: u8 = 27;

    /// The address of root triangle `root` followed by the child indices in
    /// `path`, outermost first.
    pub fn new(root: u8, path: &[u8]) -> Result<Self, TrixelError> {
        path.iter()
            .try_fold(Self::root_of(root)?, |address, &child| address.child(child))
    }

    /// One of the eight root triangles.
    pub fn root_of(root: u8) -> Result<Self, TrixelError> {
        if root >= Self::ROOTS {
            return Err(TrixelError::RootOutOfRange(root));
        }
        Ok(Self {
            root,
            depth: 0,
            path: 0,
        })
    }

    /// The sub-triangle `index` one level down.
    pub fn child(&self, index: u8) -> Result<Self, TrixelError> {
        if index > 3 {
            return Err(TrixelError::ChildOutOfRange(index));
        }
        if self.depth >= Self::MAX_DEPTH {
            return Err(TrixelError::TooDeep {
                max: Self::MAX_DEPTH,
            });
        }
        Ok(Self {
            root: self.root,
            depth: self.depth + 1,
            path: self.path | (u64::from(index) << (2 * self.depth)),
        })
    }

    /// The four sub-triangles.
    pub fn children(&self) -> Result<[Self; 4], TrixelError> {
        Ok([self.child(0)?, self.child(1)?, self.child(2)?, self.child(3)?])
    }

    /// The enclosing triangle, or `None` for a root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let depth = self.depth.checked_sub(1)?;
        let mask = (1u64 << (2 * depth)) - 1;
        Some(Self {
            root: self.root,
            depth,
            path: self.path & mask,
        })
    }

    #[must_use]
    pub fn root(&self) -> u8 {
        self.root
    }

    /// Number of subdivisions below the root.
    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Child indices from the root down.
    pub fn path(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.depth).map(|level| ((self.path >> (2 * level)) & 0b11) as u8)
    }
}

impl std::fmt::Display for TrixelAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{}", self.root)?;
        for child in self.path() {
            write!(f, "{child}")?;
        }
        Ok(())
    }
}
