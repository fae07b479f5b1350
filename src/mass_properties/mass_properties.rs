use crate::math::{AngularInertia, Isometry, Point, PrincipalAngularInertia, Real, RotationMatrix};
use crate::utils;
use approx::{AbsDiffEq, RelativeEq};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// The local mass properties of a solid.
pub struct MassProperties {
    /// The center of mass of the solid expressed in its local-space.
    pub local_com: Point<Real>,
    /// The mass of the solid.
    pub mass: Real,
    /// The angular inertia tensor of the solid about its center of mass, expressed in its
    /// local-space.
    pub local_inertia: AngularInertia<Real>,
}

impl MassProperties {
    /// Initializes the mass properties from the given center-of-mass, mass, and principal
    /// angular inertia.
    ///
    /// The center-of-mass is specified in the local-space of the solid.
    /// The principal angular inertia are the angular inertia along the coordinate axes in
    /// the local-space of the solid.
    pub fn new(
        local_com: Point<Real>,
        mass: Real,
        principal_inertia: PrincipalAngularInertia<Real>,
    ) -> Self {
        Self::with_inertia_matrix(
            local_com,
            mass,
            AngularInertia::from_diagonal(&principal_inertia),
        )
    }

    /// Initializes the mass properties from the given center-of-mass, mass, and angular
    /// inertia matrix.
    pub fn with_inertia_matrix(
        local_com: Point<Real>,
        mass: Real,
        inertia: AngularInertia<Real>,
    ) -> Self {
        Self {
            local_com,
            mass,
            local_inertia: inertia,
        }
    }

    /// The inverse of the mass, or zero if the mass is zero.
    pub fn inv_mass(&self) -> Real {
        utils::inv(self.mass)
    }

    /// The diagonal of the local angular inertia tensor.
    pub fn principal_inertia(&self) -> PrincipalAngularInertia<Real> {
        self.local_inertia.diagonal()
    }

    /// The world-space center of mass of a solid whose local frame has its origin at
    /// `position` and is rotated by `rot`.
    pub fn world_com(&self, position: &Point<Real>, rot: &RotationMatrix<Real>) -> Point<Real> {
        position + rot * self.local_com.coords
    }

    /// The angular inertia tensor about the center of mass, expressed in the world-space
    /// of a solid whose local frame is rotated by `rot`.
    pub fn world_inertia(&self, rot: &RotationMatrix<Real>) -> AngularInertia<Real> {
        utils::rotate_inertia(rot, &self.local_inertia)
    }

    /// Transform each element of the mass properties.
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        // NOTE: we don't apply the parallel axis theorem here
        // because the center of mass is also transformed.
        let rot = m.rotation.to_rotation_matrix();
        Self {
            local_com: m * self.local_com,
            mass: self.mass,
            local_inertia: self.world_inertia(&rot),
        }
    }
}

impl AbsDiffEq for MassProperties {
    type Epsilon = Real;
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.local_inertia.abs_diff_eq(&other.local_inertia, epsilon)
            && self.local_com.abs_diff_eq(&other.local_com, epsilon)
            && self.mass.abs_diff_eq(&other.mass, epsilon)
    }
}

impl RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.local_inertia
            .relative_eq(&other.local_inertia, epsilon, max_relative)
            && self
                .local_com
                .relative_eq(&other.local_com, epsilon, max_relative)
            && self.mass.relative_eq(&other.mass, epsilon, max_relative)
    }
}
