use crate::mass_properties::MassProperties;
use crate::math::{Point, PrincipalAngularInertia, Real, Vector};
use crate::shape::Semiellipsoid;
use na::RealField;

impl MassProperties {
    pub(crate) fn semiellipsoid_volume_unit_inertia(
        radius: Real,
        height: Real,
    ) -> (Real, PrincipalAngularInertia<Real>) {
        let sq_radius = radius * radius;
        let sq_height = height * height;
        let volume = Real::pi() * sq_radius * height * 2.0 / 3.0;
        let principal = sq_radius * 2.0 / 5.0;
        let off_principal = (sq_radius + sq_height) / 5.0 - sq_height * 9.0 / 64.0;

        (volume, Vector::new(off_principal, off_principal, principal))
    }

    /// Computes the mass properties of a semiellipsoid.
    ///
    /// The center of mass lies on the local `z` axis at `3/8` of the height, and the inertia
    /// tensor about it is diagonal with equal `x` and `y` components.
    ///
    /// # Example
    ///
    /// ```
    /// use yeadon::mass_properties::MassProperties;
    /// use yeadon::shape::Semiellipsoid;
    ///
    /// // A hemisphere of unit radius.
    /// let hemisphere = Semiellipsoid::new(2.0 * std::f64::consts::PI, 1.0);
    /// let mprops = MassProperties::from_semiellipsoid(1.0, &hemisphere);
    ///
    /// assert!((mprops.mass - 2.0 * std::f64::consts::PI / 3.0).abs() < 1.0e-12);
    /// assert!((mprops.local_com.z - 0.375).abs() < 1.0e-12);
    /// ```
    pub fn from_semiellipsoid(density: Real, semiellipsoid: &Semiellipsoid) -> Self {
        let height = semiellipsoid.height();
        let (volume, unit_i) =
            Self::semiellipsoid_volume_unit_inertia(semiellipsoid.radius(), height);
        let mass = volume * density;

        Self::new(Point::new(0.0, 0.0, height * 3.0 / 8.0), mass, unit_i * mass)
    }
}
