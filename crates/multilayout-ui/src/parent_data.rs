//! Per-child geometry records owned by a multi-child container.

use multilayout_ui_graphics::{Point, Rect, Size};
use multilayout_ui_layout::RenderBox;
use std::fmt;

/// Data the container keeps about each child: the id the delegate uses to
/// address it and the offset the delegate assigned during the last pass.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiChildParentData<Id> {
    pub id: Option<Id>,
    pub offset: Point,
}

impl<Id> MultiChildParentData<Id> {
    pub fn new(id: Option<Id>) -> Self {
        Self {
            id,
            offset: Point::ZERO,
        }
    }
}

/// A child of a [`CustomMultiChildLayout`](crate::CustomMultiChildLayout).
pub struct LayoutChild<Id> {
    pub(crate) parent_data: MultiChildParentData<Id>,
    pub(crate) size: Option<Size>,
    pub(crate) node: Box<dyn RenderBox>,
}

impl<Id> LayoutChild<Id> {
    pub fn new(id: Id, node: impl RenderBox + 'static) -> Self {
        Self::from_parts(Some(id), Box::new(node))
    }

    /// A child without an id. Laying out a container holding one fails.
    pub fn anonymous(node: impl RenderBox + 'static) -> Self {
        Self::from_parts(None, Box::new(node))
    }

    pub fn from_parts(id: Option<Id>, node: Box<dyn RenderBox>) -> Self {
        Self {
            parent_data: MultiChildParentData::new(id),
            size: None,
            node,
        }
    }

    pub fn id(&self) -> Option<&Id> {
        self.parent_data.id.as_ref()
    }

    pub fn parent_data(&self) -> &MultiChildParentData<Id> {
        &self.parent_data
    }

    pub fn offset(&self) -> Point {
        self.parent_data.offset
    }

    /// Size measured during the most recent pass, if the child was laid out.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Bounds relative to the container origin. Unmeasured children are empty.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.offset(), self.size.unwrap_or(Size::ZERO))
    }

    pub fn node(&self) -> &dyn RenderBox {
        self.node.as_ref()
    }

    pub(crate) fn describe(&self) -> String {
        format!("{:?}", self.node)
    }

    /// Forgets the geometry of the previous pass.
    pub(crate) fn reset_geometry(&mut self) {
        self.parent_data.offset = Point::ZERO;
        self.size = None;
    }
}

impl<Id: fmt::Debug> fmt::Debug for LayoutChild<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutChild")
            .field("id", &self.parent_data.id)
            .field("offset", &self.parent_data.offset)
            .field("size", &self.size)
            .field("node", &self.node)
            .finish()
    }
}
