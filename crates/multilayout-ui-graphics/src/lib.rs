//! Pure geometry data for Multilayout
//!
//! This crate contains the point, size and rectangle primitives shared by
//! the layout contracts and the delegation protocol.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
