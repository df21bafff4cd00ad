//! Layout contracts shared by Multilayout render nodes

mod axis;
mod constraints;
mod core;
mod intrinsics;

pub use axis::*;
pub use constraints::*;
pub use core::*;
pub use intrinsics::*;

pub mod prelude {
    pub use crate::constraints::{Constraints, ConstraintsViolation};
    pub use crate::core::{LayoutFailure, RenderBox};
    pub use crate::intrinsics::IntrinsicDimension;
}
