use crate::mass_properties::MassProperties;
use crate::math::Real;
use crate::shape::{Semiellipsoid, StadiumSolid};

/// The geometry of a solid of the body model.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SolidShape {
    /// A solid swept between two stadia.
    StadiumSolid(StadiumSolid),
    /// A semiellipsoid with a circular base.
    Semiellipsoid(Semiellipsoid),
}

impl SolidShape {
    /// The distance from the base of the solid to its top, along its local `z` axis.
    pub fn height(&self) -> Real {
        match self {
            SolidShape::StadiumSolid(s) => s.height(),
            SolidShape::Semiellipsoid(s) => s.height(),
        }
    }

    /// Computes the mass properties of this shape, in its own frame, with the given density.
    pub fn mass_properties(&self, density: Real) -> MassProperties {
        match self {
            SolidShape::StadiumSolid(s) => MassProperties::from_stadium_solid(density, s),
            SolidShape::Semiellipsoid(s) => MassProperties::from_semiellipsoid(density, s),
        }
    }

    /// The stadium solid, if this is one.
    pub fn as_stadium_solid(&self) -> Option<&StadiumSolid> {
        match self {
            SolidShape::StadiumSolid(s) => Some(s),
            SolidShape::Semiellipsoid(_) => None,
        }
    }

    /// The semiellipsoid, if this is one.
    pub fn as_semiellipsoid(&self) -> Option<&Semiellipsoid> {
        match self {
            SolidShape::Semiellipsoid(s) => Some(s),
            SolidShape::StadiumSolid(_) => None,
        }
    }
}

impl From<StadiumSolid> for SolidShape {
    fn from(s: StadiumSolid) -> Self {
        SolidShape::StadiumSolid(s)
    }
}

impl From<Semiellipsoid> for SolidShape {
    fn from(s: Semiellipsoid) -> Self {
        SolidShape::Semiellipsoid(s)
    }
}
