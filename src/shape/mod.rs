//! Cross-sections and solids of the body model.

pub use self::semiellipsoid::Semiellipsoid;
pub use self::solid_shape::SolidShape;
pub use self::stadium::{
    Alignment, CircleReduction, DegenerateCorrection, InputMode, Stadium, StadiumError,
    StadiumInput,
};
pub use self::stadium_label::{StadiumLabel, ACROMION_BOTTOM_OF_NECK, STADIUM_LABELS};
pub use self::stadium_solid::StadiumSolid;

mod semiellipsoid;
mod solid_shape;
mod stadium;
mod stadium_label;
mod stadium_solid;
