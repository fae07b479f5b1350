/*!
yeadon
========

**yeadon** computes the mass, center of mass and inertia tensor of the
geometric solids used by Yeadon's model of the human body: stadium solids
(solids swept between two stadium cross-sections) and semiellipsoids.

Solids compute their properties in their own frame, with the origin at the
center of their base and the `z` axis along their height. Once a solid is
given a position and orientation, its properties are re-expressed in the
shared body frame.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod mass_properties;
pub mod shape;
pub mod solid;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Rotation3, Translation3, Vector3};

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The rotation matrix type.
    pub type RotationMatrix<N> = Rotation3<N>;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The translation type.
    pub use Translation3 as Translation;

    /// The angular inertia tensor of a solid.
    pub type AngularInertia<N> = Matrix3<N>;

    /// The principal angular inertia of a solid.
    pub type PrincipalAngularInertia<N> = Vector3<N>;
}
