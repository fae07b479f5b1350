//! Solids of the body model, placed in the body frame.

use crate::mass_properties::MassProperties;
use crate::math::{AngularInertia, Isometry, Point, Real, RotationMatrix, Vector};
use crate::shape::{Semiellipsoid, SolidShape, Stadium, StadiumSolid};
use std::fmt;

/// Errors raised while defining or querying a solid.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum SolidError {
    /// Absolute properties were requested before the solid was given an orientation.
    #[error("solid '{label}' has no orientation. You must set the orientation before attempting to calculate the properties.")]
    OrientationNotSet {
        /// The solid's label.
        label: String,
    },
    /// The density is not a finite positive number.
    #[error("solid '{label}' must have a finite positive density, got {density}.")]
    InvalidDensity {
        /// The solid's label.
        label: String,
        /// The rejected density.
        density: Real,
    },
    /// The perimeter of a semiellipsoid's base is not a finite nonnegative number.
    #[error("solid '{label}' must have a finite nonnegative base perimeter, got {base_perimeter}.")]
    InvalidBasePerimeter {
        /// The solid's label.
        label: String,
        /// The rejected perimeter.
        base_perimeter: Real,
    },
    /// The height is not a finite nonnegative number.
    #[error("solid '{label}' must have a finite nonnegative height, got {height}.")]
    InvalidHeight {
        /// The solid's label.
        label: String,
        /// The rejected height.
        height: Real,
    },
}

/// The placement of a solid in the body frame, and the properties that follow from it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Orientation {
    /// The position of the center of the solid's base.
    pub position: Point<Real>,
    /// The rotation mapping vectors of the solid's frame to the body frame.
    pub rotation: RotationMatrix<Real>,
    /// The position of the center of the solid's top: `position + height * rotation * z`.
    pub end_position: Point<Real>,
    /// The center of mass in the body frame.
    pub world_com: Point<Real>,
    /// The inertia tensor about the solid's center of mass, expressed in the body frame.
    pub world_inertia: AngularInertia<Real>,
}

impl Orientation {
    fn new(
        position: Point<Real>,
        rotation: RotationMatrix<Real>,
        height: Real,
        mprops: &MassProperties,
    ) -> Self {
        let mut result = Self {
            position,
            rotation,
            end_position: position + rotation * Vector::z() * height,
            world_com: position,
            world_inertia: mprops.local_inertia,
        };
        result.update_world_mass_properties(mprops);
        result
    }

    fn update_world_mass_properties(&mut self, mprops: &MassProperties) {
        self.world_com = mprops.world_com(&self.position, &self.rotation);
        self.world_inertia = mprops.world_inertia(&self.rotation);
    }
}

/// A solid of the body model: a shape, its density, and where it is in the body.
///
/// The mass, center of mass and inertia tensor of the solid in its own frame are computed
/// once, at construction. The solid's frame has its origin at the center of the solid's
/// base and its `z` axis along the height of the solid.
///
/// The absolute properties are only available once the solid has been placed with
/// [`Solid::set_orientation`]. It may be placed again any number of times, e.g., to model
/// different postures.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "SolidDefinition", into = "SolidDefinition")
)]
pub struct Solid {
    label: String,
    density: Real,
    shape: SolidShape,
    local_mprops: MassProperties,
    orientation: Option<Orientation>,
}

impl Solid {
    /// Creates a solid of the given shape and density (kg/m³).
    pub fn new(
        label: impl Into<String>,
        density: Real,
        shape: impl Into<SolidShape>,
    ) -> Result<Self, SolidError> {
        let label = label.into();
        let shape = shape.into();

        if !(density > 0.0 && density.is_finite()) {
            return Err(SolidError::InvalidDensity { label, density });
        }

        let height = shape.height();
        if !(height >= 0.0 && height.is_finite()) {
            return Err(SolidError::InvalidHeight { label, height });
        }

        if let SolidShape::Semiellipsoid(s) = &shape {
            let base_perimeter = s.base_perimeter();
            if !(base_perimeter >= 0.0 && base_perimeter.is_finite()) {
                return Err(SolidError::InvalidBasePerimeter {
                    label,
                    base_perimeter,
                });
            }
        }

        let local_mprops = shape.mass_properties(density);

        Ok(Self {
            label,
            density,
            shape,
            local_mprops,
            orientation: None,
        })
    }

    /// Creates a solid swept between the stadia `lower` and `upper`, `height` apart.
    pub fn stadium_solid(
        label: impl Into<String>,
        density: Real,
        lower: Stadium,
        upper: Stadium,
        height: Real,
    ) -> Result<Self, SolidError> {
        Self::new(label, density, StadiumSolid::new(lower, upper, height))
    }

    /// Creates a semiellipsoid from the perimeter of its circular base and its height.
    pub fn semiellipsoid(
        label: impl Into<String>,
        density: Real,
        base_perimeter: Real,
        height: Real,
    ) -> Result<Self, SolidError> {
        Self::new(label, density, Semiellipsoid::new(base_perimeter, height))
    }

    /// The name of this solid.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The part of the label before its first `:`, e.g. `"s0"` for `"s0: hip"`.
    pub fn label_code(&self) -> &str {
        self.label
            .split_once(':')
            .map_or(self.label.as_str(), |(code, _)| code)
    }

    /// The density of this solid (kg/m³).
    pub fn density(&self) -> Real {
        self.density
    }

    /// The distance from the base to the top of this solid (m).
    pub fn height(&self) -> Real {
        self.shape.height()
    }

    /// The geometry of this solid.
    pub fn shape(&self) -> &SolidShape {
        &self.shape
    }

    /// The mass properties of this solid, in its own frame.
    pub fn local_mass_properties(&self) -> &MassProperties {
        &self.local_mprops
    }

    /// The mass of this solid (kg).
    pub fn mass(&self) -> Real {
        self.local_mprops.mass
    }

    /// The center of mass of this solid in its own frame (m).
    pub fn relative_com(&self) -> Point<Real> {
        self.local_mprops.local_com
    }

    /// The inertia tensor of this solid about its center of mass, in its own frame (kg·m²).
    pub fn relative_inertia(&self) -> AngularInertia<Real> {
        self.local_mprops.local_inertia
    }

    /// Places this solid with the center of its base at `position` and with the given
    /// orientation, then computes its absolute properties.
    pub fn set_orientation(&mut self, position: Point<Real>, rotation: RotationMatrix<Real>) {
        log::debug!("placing solid '{}' at {:?}.", self.label, position.coords.as_slice());
        self.orientation = Some(Orientation::new(
            position,
            rotation,
            self.height(),
            &self.local_mprops,
        ));
    }

    /// Places this solid at the given pose, see [`Solid::set_orientation`].
    pub fn set_pose(&mut self, pose: &Isometry<Real>) {
        self.set_orientation(
            Point::from(pose.translation.vector),
            pose.rotation.to_rotation_matrix(),
        )
    }

    /// Recomputes the absolute center of mass and inertia from the current orientation.
    pub fn transform_properties(&mut self) -> Result<(), SolidError> {
        let orientation = self
            .orientation
            .as_mut()
            .ok_or_else(|| SolidError::OrientationNotSet {
                label: self.label.clone(),
            })?;
        orientation.update_world_mass_properties(&self.local_mprops);
        Ok(())
    }

    /// Has this solid been placed?
    pub fn is_oriented(&self) -> bool {
        self.orientation.is_some()
    }

    /// The placement of this solid, if any.
    pub fn orientation(&self) -> Option<&Orientation> {
        self.orientation.as_ref()
    }

    fn oriented(&self) -> Result<&Orientation, SolidError> {
        self.orientation
            .as_ref()
            .ok_or_else(|| SolidError::OrientationNotSet {
                label: self.label.clone(),
            })
    }

    /// The position of the center of this solid's base, in the body frame.
    pub fn position(&self) -> Result<Point<Real>, SolidError> {
        self.oriented().map(|o| o.position)
    }

    /// The rotation from this solid's frame to the body frame.
    pub fn rotation_matrix(&self) -> Result<RotationMatrix<Real>, SolidError> {
        self.oriented().map(|o| o.rotation)
    }

    /// The position of the center of this solid's top, in the body frame.
    pub fn end_position(&self) -> Result<Point<Real>, SolidError> {
        self.oriented().map(|o| o.end_position)
    }

    /// The center of mass of this solid in the body frame.
    pub fn absolute_com(&self) -> Result<Point<Real>, SolidError> {
        self.oriented().map(|o| o.world_com)
    }

    /// The inertia tensor of this solid about its center of mass, in the body frame.
    pub fn absolute_inertia(&self) -> Result<AngularInertia<Real>, SolidError> {
        self.oriented().map(|o| o.world_inertia)
    }
}

impl fmt::Display for Solid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} properties:", self.label)?;
        writeln!(f)?;
        writeln!(f, "Mass (kg): {}", self.mass())?;
        writeln!(f)?;
        writeln!(f, "COM in local solid's frame (m):{}", self.relative_com())?;
        match &self.orientation {
            Some(o) => writeln!(f, "COM in fixed human frame (m):{}", o.world_com)?,
            None => writeln!(f, "COM in fixed human frame (m): orientation not set")?,
        }
        writeln!(f)?;
        writeln!(
            f,
            "Inertia tensor in solid's frame about local solid's COM (kg-m^2):{}",
            self.relative_inertia()
        )?;
        match &self.orientation {
            Some(o) => writeln!(
                f,
                "Inertia tensor in fixed human frame about local solid's COM (kg-m^2):{}",
                o.world_inertia
            ),
            None => writeln!(
                f,
                "Inertia tensor in fixed human frame about local solid's COM (kg-m^2): orientation not set"
            ),
        }
    }
}

/// The serialized form of a solid: its mass properties and placement are computed again
/// when it is read back.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub(crate) struct SolidDefinition {
    label: String,
    density: Real,
    shape: SolidShape,
    placement: Option<(Point<Real>, RotationMatrix<Real>)>,
}

impl From<Solid> for SolidDefinition {
    fn from(solid: Solid) -> Self {
        Self {
            placement: solid.orientation.map(|o| (o.position, o.rotation)),
            label: solid.label,
            density: solid.density,
            shape: solid.shape,
        }
    }
}

impl TryFrom<SolidDefinition> for Solid {
    type Error = SolidError;

    fn try_from(def: SolidDefinition) -> Result<Self, Self::Error> {
        let mut solid = Solid::new(def.label, def.density, def.shape)?;
        if let Some((position, rotation)) = def.placement {
            solid.set_orientation(position, rotation);
        }
        Ok(solid)
    }
}
