use crate::math::Real;

/// The reciprocal of `val`, or zero if `val` is zero.
pub fn inv(val: Real) -> Real {
    if val == 0.0 {
        0.0
    } else {
        1.0 / val
    }
}

#[cfg(test)]
mod test {
    use super::inv;

    #[test]
    fn inv_of_zero_is_zero() {
        assert_eq!(inv(0.0), 0.0);
        assert_eq!(inv(-0.0), 0.0);
        assert_eq!(inv(4.0), 0.25);
    }
}
