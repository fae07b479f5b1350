//! Frame transformations and small numerical helpers.

pub use self::inv::inv;
pub use self::rotate_inertia::rotate_inertia;
pub use self::rotate_space_123::rotate_space_123;

mod inv;
mod rotate_inertia;
mod rotate_space_123;
