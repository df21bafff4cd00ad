//! Testing utilities for Multilayout
//!
//! Fake children that stand in for the layout engine, delegates driven by
//! closures, and snapshot helpers for asserting on a finished pass.

pub mod boxes;
pub mod delegates;

pub use boxes::*;
pub use delegates::*;

use multilayout_ui::{ChildId, CustomMultiChildLayout, MultiChildLayoutDelegate, Point, Size};

/// Geometry of one child after a pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildGeometry<Id> {
    pub id: Option<Id>,
    pub size: Option<Size>,
    pub offset: Point,
}

/// Snapshot of every child's geometry, in sibling order.
pub fn geometry_of<Id, D>(node: &CustomMultiChildLayout<Id, D>) -> Vec<ChildGeometry<Id>>
where
    Id: ChildId,
    D: MultiChildLayoutDelegate<Id>,
{
    node.children()
        .iter()
        .map(|child| ChildGeometry {
            id: child.id().cloned(),
            size: child.size(),
            offset: child.offset(),
        })
        .collect()
}

pub mod prelude {
    pub use crate::boxes::{FailingBox, FixedBox, MeasureLog};
    pub use crate::delegates::ScriptedDelegate;
    pub use crate::{geometry_of, ChildGeometry};
}
