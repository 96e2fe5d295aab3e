//! 5-dimensional vector.

use crate::{Coords, Float, Vector, Vector3, VectorError, VectorN, base};

/// 5-dimensional Euclidean vector.
#[derive(Debug, Default, Copy, Clone)]
pub struct Vector5([Float; 5]);

impl_vector_traits!(impl for Vector5; eq [Vector3, Vector5, VectorN]);

impl Vector5 {
    /// Number of coordinates in the vector.
    pub const NDIM: usize = 5;

    /// Constructs a vector from its coordinates.
    pub const fn new(a1: Float, a2: Float, a3: Float, a4: Float, a5: Float) -> Self {
        Self([a1, a2, a3, a4, a5])
    }

    /// Returns the coordinates of the vector.
    pub fn as_array(&self) -> &[Float; 5] {
        &self.0
    }

    fn try_from_coords(coords: &[Float]) -> Result<Self, VectorError> {
        coords
            .try_into()
            .map(Self)
            .map_err(|_| VectorError::WrongCoordinateCount {
                type_name: "Vector5",
                expected: Self::NDIM,
                actual: coords.len(),
            })
    }

    fn from_coords(coords: Coords) -> Self {
        Self::try_from_coords(&coords).unwrap_or_else(|e| base::invariant_violated(e))
    }
}

impl Vector for Vector5 {
    fn get(&self, index: usize) -> Result<Float, VectorError> {
        self.0
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange {
                index,
                ndim: Self::NDIM,
            })
    }

    fn ndim(&self) -> usize {
        Self::NDIM
    }

    fn add(&self, other: &Self) -> Result<Self, VectorError> {
        Ok(Self::from_coords(base::add_coords(self, other)))
    }

    fn scale(&self, scalar: Float) -> Self {
        Self::from_coords(base::scale_coords(self, scalar))
    }
}

impl From<[Float; 5]> for Vector5 {
    fn from(coords: [Float; 5]) -> Self {
        Self(coords)
    }
}

impl From<Vector5> for [Float; 5] {
    fn from(v: Vector5) -> Self {
        v.0
    }
}
