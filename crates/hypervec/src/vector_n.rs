//! Vector with a dimension chosen at construction.

use smallvec::SmallVec;

use crate::{Coords, Float, Vector, Vector3, Vector5, VectorError, base};

/// Euclidean vector of any dimension, including zero.
///
/// Unlike [`Vector3`] and [`Vector5`], two `VectorN`s may have different
/// dimensions, so binary operations check dimensions at runtime.
#[derive(Debug, Default, Clone)]
pub struct VectorN(Coords);

impl_vector_traits!(impl for VectorN; eq [Vector3, Vector5, VectorN]);

impl VectorN {
    /// Zero-dimensional empty vector.
    pub const EMPTY: Self = Self(SmallVec::new_const());

    /// Constructs a vector from a sequence of coordinates. The dimension of
    /// the vector is the length of the sequence.
    pub fn new(coords: impl IntoIterator<Item = Float>) -> Self {
        coords.into_iter().collect()
    }

    /// Constructs a vector from a sequence of coordinates.
    pub fn from_coords(coords: Coords) -> Self {
        Self(coords)
    }

    /// Returns a zero vector.
    pub fn zero(ndim: usize) -> Self {
        Self(smallvec::smallvec![0.0; ndim])
    }

    /// Returns the coordinates of the vector.
    pub fn as_slice(&self) -> &[Float] {
        &self.0
    }
}

impl Vector for VectorN {
    fn get(&self, index: usize) -> Result<Float, VectorError> {
        self.0.get(index).copied().ok_or(VectorError::IndexOutOfRange {
            index,
            ndim: self.ndim(),
        })
    }

    fn ndim(&self) -> usize {
        self.0.len()
    }

    fn add(&self, other: &Self) -> Result<Self, VectorError> {
        base::check_same_ndim(self, other)?;
        Ok(Self(base::add_coords(self, other)))
    }

    fn scale(&self, scalar: Float) -> Self {
        Self(base::scale_coords(self, scalar))
    }
}

impl FromIterator<Float> for VectorN {
    fn from_iter<T: IntoIterator<Item = Float>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Float>> for VectorN {
    fn from(coords: Vec<Float>) -> Self {
        Self(Coords::from_vec(coords))
    }
}

impl From<&[Float]> for VectorN {
    fn from(coords: &[Float]) -> Self {
        Self(Coords::from_slice(coords))
    }
}

impl From<Vector3> for VectorN {
    fn from(v: Vector3) -> Self {
        Self(v.to_coords())
    }
}

impl From<Vector5> for VectorN {
    fn from(v: Vector5) -> Self {
        Self(v.to_coords())
    }
}
