use core::fmt;

/// Errors returned by [`crate::FenwickTree`] operations.
///
/// Every fallible operation validates its arguments before touching the tree, so an `Err`
/// always means the tree is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FenwickError {
    /// An index fell outside `min..=max`.
    IndexOutOfRange { index: usize, min: usize, max: usize },
    /// `build` was handed a slice whose length is not `len() + 1`.
    SizeMismatch { expected: usize, actual: usize },
    /// A deserialized accumulator vector is empty or has a non-zero sentinel slot.
    InvalidSnapshot,
}

impl fmt::Display for FenwickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, min, max } => {
                write!(f, "index {index} out of range (expected {min}..={max})")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "build size mismatch (expected {expected} values, got {actual})")
            }
            Self::InvalidSnapshot => f.write_str("invalid fenwick tree snapshot"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FenwickError {}
