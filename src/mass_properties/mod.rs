//! Mass properties (mass, inertia, center-of-mass) of solids.

pub use self::mass_properties::MassProperties;

mod mass_properties;
mod mass_properties_semiellipsoid;
mod mass_properties_stadium_solid;

/// Free functions for some special-cases of mass-properties computation.
pub mod details {
    pub use super::mass_properties_stadium_solid::{f1, f2, f3, f4, f5};
}
