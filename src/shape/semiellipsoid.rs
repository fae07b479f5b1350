use crate::math::Real;
use na::RealField;

/// Half of an ellipsoid of revolution, cut through its circular equator.
///
/// The circular base lies in the `z = 0` plane of the solid's frame, centered at the
/// origin, and the remaining semi-axis points along `+z`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Semiellipsoid {
    base_perimeter: Real,
    height: Real,
}

impl Semiellipsoid {
    /// Creates a semiellipsoid from the perimeter of its base and its height.
    pub fn new(base_perimeter: Real, height: Real) -> Self {
        Self {
            base_perimeter,
            height,
        }
    }

    /// The perimeter of the circular base.
    pub fn base_perimeter(&self) -> Real {
        self.base_perimeter
    }

    /// The radius of the circular base.
    pub fn radius(&self) -> Real {
        self.base_perimeter / Real::two_pi()
    }

    /// The semi-axis orthogonal to the base.
    pub fn height(&self) -> Real {
        self.height
    }
}
