//! Delegate-driven multi-child layout for Multilayout render trees
//!
//! A [`CustomMultiChildLayout`] owns a list of id-tagged children and hands
//! each layout pass to a [`MultiChildLayoutDelegate`]. The delegate decides
//! the container size from the incoming constraints, then sizes every child
//! exactly once and positions any of them through a [`LayoutContext`].
//! Protocol violations surface as [`LayoutError`]s from the pass.

mod collections;
mod delegate;
mod error;
mod parent_data;
mod pass;
mod render_box;

pub use delegate::{ChildId, DelegateHost, MultiChildLayoutDelegate, RelayoutSignal};
pub use error::{ChildOperation, LayoutError};
pub use parent_data::{LayoutChild, MultiChildParentData};
pub use pass::{LayoutContext, PROTOCOL_CHECKS};
pub use render_box::CustomMultiChildLayout;

pub use multilayout_ui_graphics::{Point, Rect, Size};
pub use multilayout_ui_layout::{
    Constraints, ConstraintsViolation, IntrinsicDimension, LayoutFailure, RenderBox,
};

pub mod prelude {
    pub use crate::delegate::{DelegateHost, MultiChildLayoutDelegate};
    pub use crate::error::LayoutError;
    pub use crate::parent_data::LayoutChild;
    pub use crate::pass::LayoutContext;
    pub use crate::render_box::CustomMultiChildLayout;
    pub use multilayout_ui_graphics::prelude::*;
    pub use multilayout_ui_layout::prelude::*;
}
