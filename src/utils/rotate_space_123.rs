use crate::math::{Real, RotationMatrix, Vector};

/// Builds the rotation matrix of a space-fixed 1-2-3 rotation sequence.
///
/// The frame is first rotated by `angles.x` about the fixed `x` axis, then by `angles.y`
/// about the fixed `y` axis, and finally by `angles.z` about the fixed `z` axis, i.e.
/// `R = Rz(angles.z) · Ry(angles.y) · Rx(angles.x)`.
pub fn rotate_space_123(angles: &Vector<Real>) -> RotationMatrix<Real> {
    RotationMatrix::from_euler_angles(angles.x, angles.y, angles.z)
}
