//! Construction errors for cell arrays and kernels.

use std::error::Error;
use std::fmt;

/// Errors detected while validating the tables a container or kernel is
/// built from.
///
/// Per-access contract violations (zero signed ids, out-of-range cells)
/// are not represented here; they panic at the point of access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The offset table is empty; it needs at least one entry.
    EmptyOffsets,
    /// The first offset is neither `0` (0-based) nor `1` (1-based).
    InvalidOffsetBase {
        /// The first entry of the table.
        first: usize,
    },
    /// Offsets decrease between two consecutive cells.
    NonMonotonicOffsets {
        /// Index of the cell whose end precedes its start.
        cell: usize,
        /// Offset at `cell`.
        start: usize,
        /// Offset at `cell + 1`.
        end: usize,
    },
    /// The final offset does not match the backing buffer length.
    OffsetsLengthMismatch {
        /// Number of data elements the offset table addresses.
        expected: usize,
        /// Actual length of the backing buffer.
        actual: usize,
    },
    /// A strided array was built with a stride of zero.
    ZeroStride,
    /// A dense operator's entry count does not match its declared shape.
    ShapeMismatch {
        /// Entries implied by the declared shape.
        expected: usize,
        /// Entries supplied.
        actual: usize,
    },
    /// Zipped containers disagree on their number of cells.
    LengthMismatch {
        /// Cell count of the first container.
        left: usize,
        /// Cell count of the second container.
        right: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOffsets => write!(f, "offset table must have at least one entry"),
            Self::InvalidOffsetBase { first } => {
                write!(f, "offset table must start at 0 or 1, got {first}")
            }
            Self::NonMonotonicOffsets { cell, start, end } => {
                write!(
                    f,
                    "offsets decrease at cell {cell}: start {start} > next offset {end}"
                )
            }
            Self::OffsetsLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "offset table addresses {expected} elements but data has {actual}"
                )
            }
            Self::ZeroStride => write!(f, "stride must be at least 1"),
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "shape needs {expected} entries, got {actual}")
            }
            Self::LengthMismatch { left, right } => {
                write!(f, "zipped containers differ in length: {left} != {right}")
            }
        }
    }
}

impl Error for ArrayError {}
