//! 3-dimensional vector.

use crate::{Coords, Float, Vector, Vector5, VectorError, VectorN, base};

/// 3-dimensional Euclidean vector.
#[derive(Debug, Default, Copy, Clone)]
pub struct Vector3 {
    x: Float,
    y: Float,
    z: Float,
}

impl_vector_traits!(impl for Vector3; eq [Vector3, Vector5, VectorN]);

impl Vector3 {
    /// Number of coordinates in the vector.
    pub const NDIM: usize = 3;

    /// Constructs a vector from its coordinates.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Returns the X coordinate.
    pub fn x(&self) -> Float {
        self.x
    }
    /// Returns the Y coordinate.
    pub fn y(&self) -> Float {
        self.y
    }
    /// Returns the Z coordinate.
    pub fn z(&self) -> Float {
        self.z
    }

    fn try_from_coords(coords: &[Float]) -> Result<Self, VectorError> {
        match *coords {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(VectorError::WrongCoordinateCount {
                type_name: "Vector3",
                expected: Self::NDIM,
                actual: coords.len(),
            }),
        }
    }

    fn from_coords(coords: Coords) -> Self {
        Self::try_from_coords(&coords).unwrap_or_else(|e| base::invariant_violated(e))
    }
}

impl Vector for Vector3 {
    fn get(&self, index: usize) -> Result<Float, VectorError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(VectorError::IndexOutOfRange {
                index,
                ndim: Self::NDIM,
            }),
        }
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

impl From<[Float; 3]> for Vector3 {
    fn from([x, y, z]: [Float; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [Float; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::vector_n;

    #[test]
    fn test_vector3_get() {
        let v = Vector3::new(1.0, 5.0, 2.0);
        assert_eq!(v.get(0), Ok(1.0));
        assert_eq!(v.get(1), Ok(5.0));
        assert_eq!(v.get(2), Ok(2.0));
        assert_eq!(
            v.get(3),
            Err(VectorError::IndexOutOfRange { index: 3, ndim: 3 }),
        );
        assert!(v.get(10_000).is_err());
        assert_eq!((v.x(), v.y(), v.z()), (1.0, 5.0, 2.0));
    }

    #[test]
    fn test_vector3_ndim() {
        assert_eq!(Vector3::new(4.0, -5.0, 0.0).ndim(), 3);
        assert_eq!(Vector3::default().ndim(), 3);
    }

    #[test]
    fn test_vector3_add() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(3.0, 2.0, 1.0);
        assert_eq!(a.add(&b), Ok(Vector3::new(4.0, 4.0, 4.0)));
    }

    #[test]
    fn test_vector3_scale() {
        assert_eq!(
            Vector3::new(1.0, 2.0, 8.0).scale(2.5),
            Vector3::new(2.5, 5.0, 20.0),
        );
        assert_eq!(
            Vector3::new(1.0, 2.0, 3.0).scale(-1.0),
            Vector3::new(-1.0, -2.0, -3.0),
        );
        assert_eq!(
            Vector3::new(1_000_000_087.0, 274_832_723.0, 384_238.0).scale(0.0),
            Vector3::default(),
        );
    }

    #[test]
    fn test_vector3_derived_ops() {
        let a = Vector3::new(1.0, 3.0, -5.0);
        let b = Vector3::new(4.0, -2.0, -1.0);
        assert_eq!(a.minus(&b), Ok(Vector3::new(-3.0, 5.0, -4.0)));
        assert_eq!(a.dot(&b), Ok(3.0));
        assert_eq!(a.cmp_by_coordinate(&b, 0), Ok(Ordering::Less));
        assert_eq!(a.cmp_by_coordinate(&b, 1), Ok(Ordering::Greater));
        assert_eq!(a.cmp_by_coordinate(&b, 2), Ok(Ordering::Less));
    }

    #[test]
    fn test_vector3_eq() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_ne!(v, Vector3::new(1.0, 2.0, 4.0));
        assert_eq!(v, vector_n![1.0, 2.0, 3.0]);
        assert_ne!(v, vector_n![1.0, 2.0]);
        assert_ne!(v, Vector5::new(1.0, 2.0, 3.0, 0.0, 0.0));
    }

    #[test]
    fn test_vector3_display() {
        assert_eq!(Vector3::new(1.0, 2.0, 3.0).to_string(), "(1, 2, 3)");
        assert_eq!(Vector3::new(0.5, -2.0, 1e-3).to_string(), "(0.5, -2, 0.001)");
        assert_eq!(
            format!("{:.1}", Vector3::new(1.0, 2.0, 3.0)),
            "(1.0, 2.0, 3.0)",
        );
    }

    #[test]
    fn test_vector3_coords_constructor() {
        assert_eq!(
            Vector3::try_from_coords(&[1.0, 2.0, 3.0]),
            Ok(Vector3::new(1.0, 2.0, 3.0)),
        );
        let err = Vector3::try_from_coords(&[1.0, 2.0]).unwrap_err();
        assert!(err.is_construction_invariant());
    }

    #[test]
    #[should_panic(expected = "wrong coordinate count for Vector3")]
    fn test_vector3_from_wrong_coords_panics() {
        Vector3::from_coords(Coords::from_slice(&[1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_vector3_array_conversion() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(<[Float; 3]>::from(v), [1.0, 2.0, 3.0]);
    }
}
