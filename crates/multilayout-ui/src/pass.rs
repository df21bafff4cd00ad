//! Per-pass bookkeeping: the child registry, completion tracking, and the
//! context a delegate drives children through.

use crate::collections::map::{HashMap, HashSet};
use crate::delegate::ChildId;
use crate::error::{ChildOperation, LayoutError};
use crate::parent_data::LayoutChild;
use multilayout_ui_graphics::{Point, Size};
use multilayout_ui_layout::Constraints;
use smallvec::SmallVec;
use std::cell::RefCell;

/// Whether the tracking checks (duplicate and missing layouts, malformed
/// constraints, duplicate ids) run. Unknown and missing ids are always
/// reported.
pub const PROTOCOL_CHECKS: bool = cfg!(any(debug_assertions, feature = "strict-protocol"));

/// Registry and completion tracking for one pass.
pub(crate) struct PassState<Id> {
    ids: HashMap<Id, usize>,
    pending: HashSet<usize>,
    active: bool,
}

impl<Id> Default for PassState<Id> {
    fn default() -> Self {
        Self {
            ids: HashMap::default(),
            pending: HashSet::default(),
            active: false,
        }
    }
}

impl<Id: ChildId> PassState<Id> {
    /// Walks the children in sibling order and registers each id.
    pub(crate) fn build(children: &[LayoutChild<Id>]) -> Result<Self, LayoutError<Id>> {
        let mut state = Self {
            active: true,
            ..Self::default()
        };
        state.ids.reserve(children.len());
        for (index, child) in children.iter().enumerate() {
            let Some(id) = child.id() else {
                return Err(LayoutError::MissingId {
                    index,
                    child: child.describe(),
                });
            };
            if let Some(first) = state.ids.insert(id.clone(), index) {
                if PROTOCOL_CHECKS {
                    return Err(LayoutError::DuplicateId {
                        id: id.clone(),
                        first,
                        second: index,
                    });
                }
            }
            if PROTOCOL_CHECKS {
                state.pending.insert(index);
            }
        }
        Ok(state)
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }
}

/// Installs a pass's state for as long as the guard lives and restores
/// whatever was installed before, on success, error, or unwind.
pub(crate) struct PassGuard<'a, Id> {
    cell: &'a RefCell<PassState<Id>>,
    previous: Option<PassState<Id>>,
}

impl<'a, Id: ChildId> PassGuard<'a, Id> {
    pub(crate) fn install(cell: &'a RefCell<PassState<Id>>, state: PassState<Id>) -> Self {
        let previous = std::mem::replace(&mut *cell.borrow_mut(), state);
        Self {
            cell,
            previous: Some(previous),
        }
    }

    /// Validates that every registered child was laid out.
    pub(crate) fn finish(self, children: &[LayoutChild<Id>]) -> Result<(), LayoutError<Id>> {
        if !PROTOCOL_CHECKS {
            return Ok(());
        }
        let mut missing: SmallVec<[usize; 8]> = self.cell.borrow().pending.iter().copied().collect();
        if missing.is_empty() {
            return Ok(());
        }
        missing.sort_unstable();
        let children = missing
            .into_iter()
            .filter_map(|index| {
                let child = &children[index];
                child.id().map(|id| (id.clone(), child.describe()))
            })
            .collect();
        Err(LayoutError::IncompleteLayout { children })
    }
}

impl<Id> Drop for PassGuard<'_, Id> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            *self.cell.borrow_mut() = previous;
        }
    }
}

/// Access to the children of the container being laid out.
///
/// Handed to [`MultiChildLayoutDelegate::perform_layout`](crate::MultiChildLayoutDelegate::perform_layout).
pub struct LayoutContext<'a, Id> {
    pass: &'a RefCell<PassState<Id>>,
    children: &'a mut [LayoutChild<Id>],
    size: Size,
}

impl<'a, Id: ChildId> LayoutContext<'a, Id> {
    pub(crate) fn new(
        pass: &'a RefCell<PassState<Id>>,
        children: &'a mut [LayoutChild<Id>],
        size: Size,
    ) -> Self {
        Self {
            pass,
            children,
            size,
        }
    }

    /// Size of the container, as resolved for this pass.
    pub fn size(&self) -> Size {
        self.size
    }

    /// True if a child with the given id takes part in this pass.
    pub fn has_child(&self, id: &Id) -> bool {
        self.pass.borrow().ids.contains_key(id)
    }

    /// Sizes the child with the given id and returns its size.
    ///
    /// Must be called exactly once for each child during a pass.
    pub fn layout_child(
        &mut self,
        id: &Id,
        constraints: Constraints,
    ) -> Result<Size, LayoutError<Id>> {
        let index = self.claim(id, constraints)?;
        // No registry borrow is held here: the child may run a nested pass
        // on the same host.
        let child = &mut self.children[index];
        let size = child
            .node
            .layout(constraints)
            .map_err(|source| LayoutError::ChildFailed {
                id: id.clone(),
                child: child.describe(),
                source,
            })?;
        child.size = Some(size);
        Ok(size)
    }

    /// Places the child with the given id at `offset` from the container origin.
    pub fn position_child(&mut self, id: &Id, offset: Point) -> Result<(), LayoutError<Id>> {
        let index = self.index_of(id, ChildOperation::Position)?;
        self.children[index].parent_data.offset = offset;
        Ok(())
    }

    fn index_of(&self, id: &Id, operation: ChildOperation) -> Result<usize, LayoutError<Id>> {
        self.pass
            .borrow()
            .ids
            .get(id)
            .copied()
            .ok_or_else(|| LayoutError::UnknownChild {
                id: id.clone(),
                operation,
            })
    }

    /// Resolves `id` and marks it as laid out, rejecting repeats and
    /// malformed constraints before the engine is involved.
    fn claim(&self, id: &Id, constraints: Constraints) -> Result<usize, LayoutError<Id>> {
        let index = self.index_of(id, ChildOperation::Layout)?;
        if !PROTOCOL_CHECKS {
            return Ok(index);
        }
        if !self.pass.borrow_mut().pending.remove(&index) {
            return Err(LayoutError::DuplicateLayout {
                id: id.clone(),
                child: self.children[index].describe(),
            });
        }
        if let Err(violation) = constraints.validate() {
            return Err(LayoutError::InvalidConstraints {
                id: id.clone(),
                child: self.children[index].describe(),
                constraints,
                violation,
            });
        }
        Ok(index)
    }
}

#[cfg(test)]
#[path = "tests/pass_tests.rs"]
mod tests;
