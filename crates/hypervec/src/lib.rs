//! Euclidean vectors of fixed (3D, 5D) and variable dimension.
//!
//! Every vector type implements the four primitives of [`Vector`]
//! (coordinate access, dimension, addition, and scalar multiplication).
//! Subtraction, dot product, per-coordinate comparison, equality, and
//! rendering are derived from those primitives once and shared by all types.
//!
//! ```
//! use hypervec::prelude::*;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(3.0, 2.0, 1.0);
//! assert_eq!(a.add(&b)?, Vector3::new(4.0, 4.0, 4.0));
//! assert_eq!(a.to_string(), "(1, 2, 3)");
//!
//! let v = vector_n![1.0, 2.0];
//! assert!(v.add(&vector_n![4.0, 5.0, 6.0]).is_err());
//! # Ok::<(), VectorError>(())
//! ```

pub use smallvec;

/// Floating-point type used for coordinates.
pub type Float = f64;

/// Constructs a [`VectorN`], using the same syntax as `vec![]`.
#[macro_export]
macro_rules! vector_n {
    [$($tok:tt)*] => {
        $crate::VectorN::from_coords($crate::smallvec::smallvec![$($tok)*])
    };
}

#[macro_use]
mod impl_macros;

mod base;
pub mod error;
pub mod vector;
pub mod vector3;
pub mod vector5;
pub mod vector_n;


pub use base::Coords;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::error::VectorError;
    pub use crate::vector::{CoordIter, Vector};
    pub use crate::vector_n;
    pub use crate::vector3::Vector3;
    pub use crate::vector5::Vector5;
    pub use crate::vector_n::VectorN;
    pub use crate::{Coords, Float};
}
pub use prelude::*;

/// Traits only.
pub mod traits {
    pub use crate::vector::Vector;
}
