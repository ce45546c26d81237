/// Errors from building or navigating trixel addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TrixelError {
    #[error("root triangle {0} is outside 0..=7")]
    RootOutOfRange(u8),

    #[error("child index {0} is outside 0..=3")]
    ChildOutOfRange(u8),

    #[error("trixel addresses are at most {max} levels deep")]
    TooDeep { max: u8 },

    #[error("path sets child bits past depth {depth}")]
    PathBeyondDepth { depth: u8 },
}
