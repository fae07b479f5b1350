use crate::math::{AngularInertia, Real, RotationMatrix};

/// Re-expresses an inertia tensor in the frame obtained by rotating its current frame by `rot`.
///
/// This is the similarity transform `R · I · Rᵀ`. If `inertia` is expressed in a solid's
/// own frame and `rot` maps vectors of that frame to the body frame, the result is the
/// same tensor expressed in the body frame.
///
/// # Example
///
/// ```
/// use yeadon::math::{Matrix3, Rotation3, Vector3};
/// use yeadon::utils::rotate_inertia;
///
/// let inertia = Matrix3::from_diagonal(&Vector3::new(1.0, 2.0, 3.0));
/// let quarter_turn = Rotation3::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2);
/// let rotated = rotate_inertia(&quarter_turn, &inertia);
///
/// assert!((rotated.m11 - 2.0).abs() < 1.0e-12);
/// assert!((rotated.m22 - 1.0).abs() < 1.0e-12);
/// ```
pub fn rotate_inertia(
    rot: &RotationMatrix<Real>,
    inertia: &AngularInertia<Real>,
) -> AngularInertia<Real> {
    let rot = rot.matrix();
    rot * inertia * rot.transpose()
}
