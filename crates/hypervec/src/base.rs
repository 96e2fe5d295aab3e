//! Helpers shared by every vector type, written only in terms of the
//! primitives of [`Vector`].

use std::cmp::Ordering;
use std::fmt;

use float_ord::FloatOrd;
use smallvec::SmallVec;

use crate::{Float, Vector, VectorError};

/// Sequence of coordinates. Stored inline up to 5 dimensions.
pub type Coords = SmallVec<[Float; 5]>;

/// Bit pattern of the NaN that every NaN is collapsed to before comparison.
const CANONICAL_NAN: Float = Float::from_bits(0x7ff8_0000_0000_0000);

/// Returns the coordinate-wise sum of `a` and `b`, with the dimension of `a`.
///
/// The caller must ensure both vectors have the same dimension.
pub(crate) fn add_coords<V: Vector>(a: &V, b: &V) -> Coords {
    std::iter::zip(a.iter(), b.iter())
        .map(|(l, r)| l + r)
        .collect()
}

/// Returns the coordinates of `v` multiplied by `scalar`.
pub(crate) fn scale_coords<V: Vector>(v: &V, scalar: Float) -> Coords {
    v.iter().map(|x| scalar * x).collect()
}

/// Returns an error if `a` and `b` have different dimensions.
pub(crate) fn check_same_ndim(a: &impl Vector, b: &impl Vector) -> Result<(), VectorError> {
    let expected = a.ndim();
    let actual = b.ndim();
    if expected != actual {
        log::trace!("dimension mismatch between {a} and {b}");
        return Err(VectorError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// Compares two floats. All NaNs are equal to each other and greater than
/// every other value, and `-0.0 < +0.0`.
pub(crate) fn total_cmp(a: Float, b: Float) -> Ordering {
    let canonicalize = |x: Float| if x.is_nan() { CANONICAL_NAN } else { x };
    FloatOrd(canonicalize(a)).cmp(&FloatOrd(canonicalize(b)))
}

/// Returns whether two vectors, possibly of different types, have the same
/// dimension and exactly the same coordinates.
///
/// A vector is always equal to itself, even if it contains NaN.
pub(crate) fn vectors_eq(a: &impl Vector, b: &impl Vector) -> bool {
    std::ptr::addr_eq(a, b)
        || (a.ndim() == b.ndim() && std::iter::zip(a.iter(), b.iter()).all(|(l, r)| l == r))
}

/// Formats a vector as `(c0, c1, ..., cn)`, forwarding formatting options
/// to each coordinate.
pub(crate) fn fmt_vector(v: &impl Vector, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "(")?;
    let mut iter = v.iter();
    if let Some(first) = iter.next() {
        fmt::Display::fmt(&first, f)?;
        for elem in iter {
            write!(f, ", ")?;
            fmt::Display::fmt(&elem, f)?;
        }
    }
    write!(f, ")")?;
    Ok(())
}

/// Reports a broken construction invariant, such as a fixed-size vector built
/// from the wrong number of coordinates.
///
/// This is only reachable from a bug in this crate.
#[track_caller]
pub(crate) fn invariant_violated(e: VectorError) -> ! {
    log::error!("{e}");
    panic!("{e}")
}
