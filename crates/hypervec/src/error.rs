//! Error types.

use thiserror::Error;

/// Error produced by a vector operation.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VectorError {
    /// Coordinate index out of range
    ///
    /// This occurs when accessing or comparing a coordinate at an index that
    /// is not less than the dimension of the vector.
    #[error("coordinate index out of range: the dimension is {ndim} but the index is {index}")]
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Dimension of the vector.
        ndim: usize,
    },
    /// Dimension mismatch between operands
    #[error("dimension mismatch: expected {expected} but got {actual}")]
    DimensionMismatch {
        /// Dimension of the receiver.
        expected: usize,
        /// Dimension of the other operand.
        actual: usize,
    },
    /// Wrong number of coordinates for a fixed-size vector
    ///
    /// This is an internal consistency error and cannot be caused through
    /// the public API.
    #[error("wrong coordinate count for {type_name}: expected {expected} but got {actual}")]
    WrongCoordinateCount {
        /// Name of the vector type.
        type_name: &'static str,
        /// Dimension of the vector type.
        expected: usize,
        /// Number of coordinates supplied.
        actual: usize,
    },
}

impl VectorError {
    /// Returns whether the error was caused by an invalid argument at the call
    /// site, as opposed to a broken internal invariant.
    pub fn is_invalid_argument(self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::DimensionMismatch { .. }
        )
    }

    /// Returns whether the error indicates a broken construction invariant
    /// inside this crate.
    pub fn is_construction_invariant(self) -> bool {
        matches!(self, Self::WrongCoordinateCount { .. })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            VectorError::IndexOutOfRange { index: 7, ndim: 3 }.to_string(),
            "coordinate index out of range: the dimension is 3 but the index is 7",
        );
        assert_eq!(
            VectorError::DimensionMismatch {
                expected: 2,
                actual: 3,
            }
            .to_string(),
            "dimension mismatch: expected 2 but got 3",
        );
    }

    #[test]
    fn test_error_kinds() {
        let e = VectorError::DimensionMismatch {
            expected: 2,
            actual: 3,
        };
        assert!(e.is_invalid_argument());
        assert!(!e.is_construction_invariant());

        let e = VectorError::WrongCoordinateCount {
            type_name: "Vector3",
            expected: 3,
            actual: 4,
        };
        assert!(!e.is_invalid_argument());
        assert!(e.is_construction_invariant());
    }
}
