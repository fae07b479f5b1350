use crate::mass_properties::MassProperties;
use crate::math::{Point, Real, Vector};
use crate::shape::{Alignment, StadiumSolid};
use crate::utils;
use na::RealField;

/// First integral term of the stadium solid's properties (Yeadon 1990-ii, Appendix B).
///
/// `p` and `q` are the relative growths of two cross-section dimensions from the base to
/// the top of the solid.
pub fn f1(p: Real, q: Real) -> Real {
    1.0 + (p + q) * 0.5 + p * q / 3.0
}

/// Second integral term (Yeadon 1990-ii, Appendix B).
pub fn f2(p: Real, q: Real) -> Real {
    0.5 + (p + q) / 3.0 + p * q * 0.25
}

/// Third integral term (Yeadon 1990-ii, Appendix B).
pub fn f3(p: Real, q: Real) -> Real {
    1.0 / 3.0 + (p + q) / 4.0 + p * q * 0.2
}

/// Fourth integral term (Yeadon 1990-ii, Appendix B).
pub fn f4(p: Real, q: Real) -> Real {
    1.0 + (p + 3.0 * q) * 0.5
        + (p * q + q * q)
        + (3.0 * p * q * q + q * q * q) * 0.25
        + p * q * q * q * 0.2
}

/// Fifth integral term (Yeadon 1990-ii, Appendix B).
pub fn f5(p: Real, q: Real) -> Real {
    1.0 + (p + q)
        + (p * p + 4.0 * p * q + q * q) / 3.0
        + p * q * (p + q) * 0.5
        + p * p * q * q * 0.2
}

impl MassProperties {
    /// Computes the mass properties of a stadium solid.
    ///
    /// The formulas are those of Appendix B of Yeadon 1990-ii: the mass, center of mass and
    /// inertia are polynomial in the taper ratios `(a, b)` of the solid (see
    /// [`StadiumSolid::taper_ratios`]). The center of mass lies on the local `z` axis and
    /// the inertia tensor is diagonal with the cross-sections' long axis along `x`. If the
    /// solid is aligned anterior-posteriorly, the tensor is turned by a quarter turn about
    /// `z` so that the long axis lies along `y`.
    ///
    /// # Example
    ///
    /// ```
    /// use yeadon::mass_properties::MassProperties;
    /// use yeadon::shape::{Stadium, StadiumSolid};
    ///
    /// let base = Stadium::from_measurements("Lj1: crotch", "perimwidth", 0.55, Some(0.2), "ML")
    ///     .unwrap();
    /// let knee =
    ///     Stadium::from_measurements("Lj3: knee joint centre", "perimwidth", 0.38, Some(0.13), "ML")
    ///         .unwrap();
    /// let thigh = StadiumSolid::new(base, knee, 0.4);
    ///
    /// let mprops = MassProperties::from_stadium_solid(1020.0, &thigh);
    /// assert!(mprops.mass > 0.0);
    /// // The solid tapers, so its center of mass is below mid-height.
    /// assert!(mprops.local_com.z < 0.2);
    /// ```
    pub fn from_stadium_solid(density: Real, solid: &StadiumSolid) -> Self {
        let d = density;
        let h = solid.height();
        let r0 = solid.lower().radius();
        let t0 = solid.lower().thickness();
        let (a, b) = solid.taper_ratios();
        let pi = Real::pi();

        let mass = d * h * r0 * (4.0 * t0 * f1(a, b) + pi * r0 * f1(a, a));
        let zcom = d * h * h * (4.0 * r0 * t0 * f2(a, b) + pi * r0 * r0 * f2(a, a))
            * utils::inv(mass);

        let r0_2 = r0 * r0;
        let r0_3 = r0_2 * r0;
        let r0_4 = r0_3 * r0;
        let t0_2 = t0 * t0;
        let t0_3 = t0_2 * t0;

        // Contribution of the spread of the solid along its height.
        let axial = d * h * h * h * (4.0 * r0 * t0 * f3(a, b) + pi * r0_2 * f3(a, a));
        let com_shift = mass * zcom * zcom;

        let izcom = d
            * h
            * (4.0 * r0 * t0_3 * f4(a, b) / 3.0
                + pi * r0_2 * t0_2 * f5(a, b)
                + 4.0 * r0_3 * t0 * f4(b, a)
                + pi * r0_4 * f4(a, a) * 0.5);
        let iy = d
            * h
            * (4.0 * r0 * t0_3 * f4(a, b) / 3.0
                + pi * r0_2 * t0_2 * f5(a, b)
                + 8.0 * r0_3 * t0 * f4(b, a) / 3.0
                + pi * r0_4 * f4(a, a) * 0.25)
            + axial;
        let ix = d * h * (4.0 * r0 * t0_3 * f4(a, b) / 3.0 + pi * r0_4 * f4(a, a) * 0.25) + axial;

        let mprops = Self::new(
            Point::new(0.0, 0.0, zcom),
            mass,
            Vector::new(ix - com_shift, iy - com_shift, izcom),
        );

        match solid.alignment() {
            Alignment::MedioLateral => mprops,
            Alignment::AnteriorPosterior => {
                let quarter_turn =
                    utils::rotate_space_123(&Vector::new(0.0, 0.0, Real::frac_pi_2()));
                Self::with_inertia_matrix(
                    mprops.local_com,
                    mprops.mass,
                    utils::rotate_inertia(&quarter_turn, &mprops.local_inertia),
                )
            }
        }
    }
}
