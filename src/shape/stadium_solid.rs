use crate::math::Real;
use crate::shape::{Alignment, Stadium};

/// A solid swept linearly between two stadium cross-sections.
///
/// The lower stadium lies in the `z = 0` plane of the solid's frame and the upper one in
/// the `z = height` plane. Both are centered on the `z` axis with their long axes along
/// the same direction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct StadiumSolid {
    lower: Stadium,
    upper: Stadium,
    height: Real,
}

impl StadiumSolid {
    /// Creates a stadium solid of the given height between `lower` and `upper`.
    pub fn new(lower: Stadium, upper: Stadium, height: Real) -> Self {
        Self {
            lower,
            upper,
            height,
        }
    }

    /// The cross-section at the base of the solid.
    pub fn lower(&self) -> &Stadium {
        &self.lower
    }

    /// The cross-section at the top of the solid.
    pub fn upper(&self) -> &Stadium {
        &self.upper
    }

    /// The distance between the two cross-sections.
    pub fn height(&self) -> Real {
        self.height
    }

    /// Anterior-posterior if either cross-section is, medio-lateral otherwise.
    pub fn alignment(&self) -> Alignment {
        if self.lower.alignment() == Alignment::AnteriorPosterior
            || self.upper.alignment() == Alignment::AnteriorPosterior
        {
            Alignment::AnteriorPosterior
        } else {
            Alignment::MedioLateral
        }
    }

    /// The relative growth `(a, b)` of the radius and thickness from the lower to the upper
    /// cross-section.
    ///
    /// `a = (r1 - r0) / r0` and `b = (t1 - t0) / t0`. When the lower cross-section is a
    /// circle (`t0 = 0`), `b` is set to `1.0`.
    pub fn taper_ratios(&self) -> (Real, Real) {
        let (r0, t0) = (self.lower.radius(), self.lower.thickness());
        let (r1, t1) = (self.upper.radius(), self.upper.thickness());
        let a = (r1 - r0) / r0;

        // NOTE: does not work for circles. Every term involving `b` is scaled by `t0`, so the
        // thickness of the upper stadium is ignored when the lower one is a circle.
        let b = if t0 == 0.0 {
            log::debug!(
                "lower stadium '{}' is a circle, using thickness taper ratio b = 1.",
                self.lower.label()
            );
            1.0
        } else {
            (t1 - t0) / t0
        };

        (a, b)
    }
}
