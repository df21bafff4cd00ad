//! Container render node whose children are laid out by a delegate.

use crate::delegate::{ChildId, DelegateHost, MultiChildLayoutDelegate};
use crate::error::LayoutError;
use crate::parent_data::LayoutChild;
use crate::pass::PROTOCOL_CHECKS;
use multilayout_ui_graphics::{Point, Rect, Size};
use multilayout_ui_layout::{Axis, Constraints, IntrinsicDimension, LayoutFailure, RenderBox};
use std::fmt;
use std::rc::Rc;

/// A render box that defers the sizing and placement of its children to a
/// [`MultiChildLayoutDelegate`].
///
/// Children are kept in sibling order, which is also the paint order. Every
/// child must carry an id unique among its siblings.
pub struct CustomMultiChildLayout<Id, D> {
    host: Rc<DelegateHost<Id, D>>,
    children: Vec<LayoutChild<Id>>,
    size: Size,
    last_constraints: Option<Constraints>,
    needs_layout: bool,
    observed_generation: Option<u64>,
}

impl<Id, D> CustomMultiChildLayout<Id, D>
where
    Id: ChildId,
    D: MultiChildLayoutDelegate<Id>,
{
    pub fn new(host: Rc<DelegateHost<Id, D>>) -> Self {
        let observed_generation = host.delegate().relayout().map(|signal| signal.generation());
        Self {
            host,
            children: Vec::new(),
            size: Size::ZERO,
            last_constraints: None,
            needs_layout: true,
            observed_generation,
        }
    }

    /// Convenience for a container with a delegate it does not share.
    pub fn with_delegate(delegate: D) -> Self {
        Self::new(DelegateHost::shared(delegate))
    }

    pub fn with_child(mut self, child: LayoutChild<Id>) -> Self {
        self.push_child(child);
        self
    }

    pub fn host(&self) -> &Rc<DelegateHost<Id, D>> {
        &self.host
    }

    pub fn delegate(&self) -> &D {
        self.host.delegate()
    }

    /// Replaces the delegate host.
    ///
    /// The cached layout survives when the new delegate reports that it lays
    /// out the same way as the old one.
    pub fn set_delegate(&mut self, host: Rc<DelegateHost<Id, D>>) {
        if Rc::ptr_eq(&self.host, &host) {
            return;
        }
        let previous = std::mem::replace(&mut self.host, host);
        if self.host.delegate().should_relayout(previous.delegate()) {
            log::debug!(
                "{}: delegate replaced, relayout required",
                self.host.delegate().debug_name()
            );
            self.mark_needs_layout();
        }
        self.observed_generation = self
            .host
            .delegate()
            .relayout()
            .map(|signal| signal.generation());
    }

    pub fn children(&self) -> &[LayoutChild<Id>] {
        &self.children
    }

    pub fn child(&self, id: &Id) -> Option<&LayoutChild<Id>> {
        self.children.iter().find(|child| child.id() == Some(id))
    }

    pub fn push_child(&mut self, child: LayoutChild<Id>) {
        self.children.push(child);
        self.mark_needs_layout();
    }

    /// Inserts a child at `index` in sibling order.
    pub fn insert_child(&mut self, index: usize, child: LayoutChild<Id>) {
        self.children.insert(index, child);
        self.mark_needs_layout();
    }

    pub fn remove_child(&mut self, id: &Id) -> Option<LayoutChild<Id>> {
        let index = self.children.iter().position(|child| child.id() == Some(id))?;
        self.mark_needs_layout();
        Some(self.children.remove(index))
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn mark_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    pub fn needs_layout(&self) -> bool {
        if self.needs_layout {
            return true;
        }
        let current = self
            .host
            .delegate()
            .relayout()
            .map(|signal| signal.generation());
        current != self.observed_generation
    }

    /// Size the container would take under `constraints`, without touching
    /// the children.
    pub fn dry_layout(&self, constraints: Constraints) -> Size {
        self.resolve_size(constraints)
    }

    /// Runs one layout pass and returns the container's size.
    ///
    /// Nothing is recomputed when the constraints match the previous pass and
    /// no relayout was requested since. Malformed constraints are rejected
    /// before the delegate runs when protocol checks are on.
    pub fn layout(&mut self, constraints: Constraints) -> Result<Size, LayoutError<Id>> {
        if PROTOCOL_CHECKS {
            if let Err(violation) = constraints.validate() {
                log::error!(
                    "{}: rejected {constraints}: {violation}",
                    self.host.delegate().debug_name()
                );
                self.needs_layout = true;
                self.last_constraints = None;
                return Err(LayoutError::InvalidIncomingConstraints {
                    constraints,
                    violation,
                });
            }
        }
        if !self.needs_layout() && self.last_constraints == Some(constraints) {
            log::trace!(
                "{}: layout cache hit at {constraints}",
                self.host.delegate().debug_name()
            );
            return Ok(self.size);
        }

        let size = self.resolve_size(constraints);
        if let Err(err) = self.host.run_pass(size, &mut self.children) {
            log::error!(
                "{}: layout pass failed: {err}",
                self.host.delegate().debug_name()
            );
            self.needs_layout = true;
            self.last_constraints = None;
            return Err(err);
        }

        self.size = size;
        self.last_constraints = Some(constraints);
        self.needs_layout = false;
        self.observed_generation = self
            .host
            .delegate()
            .relayout()
            .map(|signal| signal.generation());
        Ok(size)
    }

    /// Answers an intrinsic query from the delegate's container size.
    ///
    /// The `extent` fixes the opposite axis; the queried axis is left
    /// unconstrained. Unbounded answers are reported as zero.
    pub fn intrinsic(&self, dimension: IntrinsicDimension, extent: f32) -> f32 {
        let axis = dimension.axis();
        let constraints = match axis {
            Axis::Horizontal => Constraints::tight_for_finite(f32::INFINITY, extent),
            Axis::Vertical => Constraints::tight_for_finite(extent, f32::INFINITY),
        };
        let size = self.resolve_size(constraints);
        let value = match axis {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    pub fn min_intrinsic_width(&self, height: f32) -> f32 {
        self.intrinsic(IntrinsicDimension::MinWidth, height)
    }

    pub fn max_intrinsic_width(&self, height: f32) -> f32 {
        self.intrinsic(IntrinsicDimension::MaxWidth, height)
    }

    pub fn min_intrinsic_height(&self, width: f32) -> f32 {
        self.intrinsic(IntrinsicDimension::MinHeight, width)
    }

    pub fn max_intrinsic_height(&self, width: f32) -> f32 {
        self.intrinsic(IntrinsicDimension::MaxHeight, width)
    }

    /// Children with their bounds, in paint order (sibling order).
    pub fn paint_order(&self) -> impl Iterator<Item = (&LayoutChild<Id>, Rect)> + '_ {
        self.children.iter().map(|child| (child, child.bounds()))
    }

    /// Returns the id of the topmost child containing `position`, given in
    /// container coordinates. Later siblings paint above earlier ones.
    pub fn hit_test(&self, position: Point) -> Option<&Id> {
        self.children
            .iter()
            .rev()
            .filter(|child| child.size().is_some())
            .find(|child| child.bounds().contains(position.x, position.y))
            .and_then(|child| child.id())
    }

    fn resolve_size(&self, constraints: Constraints) -> Size {
        constraints.constrain_size(self.host.delegate().resolve_size(constraints))
    }
}

impl<Id, D> RenderBox for CustomMultiChildLayout<Id, D>
where
    Id: ChildId,
    D: MultiChildLayoutDelegate<Id>,
{
    fn layout(&mut self, constraints: Constraints) -> Result<Size, LayoutFailure> {
        CustomMultiChildLayout::layout(self, constraints).map_err(|err| Box::new(err) as LayoutFailure)
    }

    fn min_intrinsic_width(&self, height: f32) -> f32 {
        CustomMultiChildLayout::min_intrinsic_width(self, height)
    }

    fn max_intrinsic_width(&self, height: f32) -> f32 {
        CustomMultiChildLayout::max_intrinsic_width(self, height)
    }

    fn min_intrinsic_height(&self, width: f32) -> f32 {
        CustomMultiChildLayout::min_intrinsic_height(self, width)
    }

    fn max_intrinsic_height(&self, width: f32) -> f32 {
        CustomMultiChildLayout::max_intrinsic_height(self, width)
    }
}

impl<Id, D> fmt::Debug for CustomMultiChildLayout<Id, D>
where
    Id: ChildId,
    D: MultiChildLayoutDelegate<Id>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomMultiChildLayout")
            .field("delegate", &self.host.delegate().debug_name())
            .field("children", &self.children.len())
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/render_box_tests.rs"]
mod tests;
