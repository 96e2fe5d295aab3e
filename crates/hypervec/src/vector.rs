//! Capability set shared by every vector type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

use crate::{Coords, Float, VectorError, base};

/// Euclidean vector with a fixed dimension.
///
/// Implementors provide only [`Vector::get()`], [`Vector::ndim()`],
/// [`Vector::add()`], and [`Vector::scale()`]. Everything else is derived
/// from those four and should not be overridden.
///
/// Vectors are immutable values: every operation returns a new vector.
pub trait Vector: Sized + Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Returns the coordinate at `index`.
    ///
    /// Returns an error if `index` is not less than [`Vector::ndim()`].
    fn get(&self, index: usize) -> Result<Float, VectorError>;

    /// Returns the number of coordinates in the vector.
    fn ndim(&self) -> usize;

    /// Returns the coordinate-wise sum of two vectors.
    ///
    /// Returns an error if the vectors have different dimensions.
    fn add(&self, other: &Self) -> Result<Self, VectorError>;

    /// Returns a copy of the vector with every coordinate multiplied by
    /// `scalar`.
    #[must_use]
    fn scale(&self, scalar: Float) -> Self;

    /// Returns the coordinate-wise difference of two vectors.
    ///
    /// This is always equivalent to `self.add(&other.scale(-1.0))`.
    fn minus(&self, other: &Self) -> Result<Self, VectorError> {
        base::check_same_ndim(self, other)?;
        self.add(&other.scale(-1.0))
    }

    /// Returns the dot product of two vectors.
    fn dot(&self, other: &Self) -> Result<Float, VectorError> {
        base::check_same_ndim(self, other)?;
        Ok(std::iter::zip(self.iter(), other.iter()).fold(0.0, |sum, (l, r)| sum + l * r))
    }

    /// Compares the coordinate at `index` of two vectors.
    ///
    /// All NaNs are equal to each other and greater than positive infinity,
    /// and negative zero is less than positive zero.
    fn cmp_by_coordinate(&self, other: &Self, index: usize) -> Result<Ordering, VectorError> {
        base::check_same_ndim(self, other)?;
        Ok(base::total_cmp(self.get(index)?, other.get(index)?))
    }

    /// Returns an iterator over the coordinates of the vector.
    fn iter(&self) -> CoordIter<'_, Self> {
        CoordIter {
            range: 0..self.ndim(),
            vector: self,
        }
    }

    /// Collects the coordinates of the vector.
    fn to_coords(&self) -> Coords {
        self.iter().collect()
    }
}

/// Iterator over the coordinates of a vector.
#[derive(Debug, Clone)]
pub struct CoordIter<'a, V> {
    range: Range<usize>,
    vector: &'a V,
}
impl<V: Vector> Iterator for CoordIter<'_, V> {
    type Item = Float;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().and_then(|i| self.vector.get(i).ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}
impl<V: Vector> ExactSizeIterator for CoordIter<'_, V> {}
