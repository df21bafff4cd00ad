//! The strategy side of the multi-child layout protocol.

use crate::error::LayoutError;
use crate::pass::{LayoutContext, PassGuard, PassState};
use crate::parent_data::LayoutChild;
use multilayout_ui_graphics::Size;
use multilayout_ui_layout::Constraints;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

/// Values usable as child ids.
pub trait ChildId: Hash + Eq + Clone + fmt::Debug + 'static {}

impl<T> ChildId for T where T: Hash + Eq + Clone + fmt::Debug + 'static {}

/// Strategy that sizes a container and lays out its named children.
///
/// A delegate never touches the render tree directly. During
/// [`perform_layout`](Self::perform_layout) it addresses children by id
/// through the [`LayoutContext`]: every registered child must be laid out
/// exactly once, in any order, and any subset may be positioned. Children
/// that are not positioned stay at the origin. Paint order is the sibling
/// order of the container's children and does not depend on layout order.
///
/// Two delegates that compare equal under
/// [`should_relayout`](Self::should_relayout) must produce identical layouts
/// for identical inputs.
pub trait MultiChildLayoutDelegate<Id: ChildId> {
    /// Size of the container for the incoming constraints.
    ///
    /// The result is clamped into `constraints` by the container. It may not
    /// depend on the children, which are not available here.
    fn resolve_size(&self, constraints: Constraints) -> Size {
        constraints.biggest()
    }

    /// Lays out and positions the children for a container of `size`.
    fn perform_layout(
        &self,
        cx: &mut LayoutContext<'_, Id>,
        size: Size,
    ) -> Result<(), LayoutError<Id>>;

    /// Whether replacing `previous` with `self` invalidates a cached layout.
    fn should_relayout(&self, previous: &Self) -> bool;

    /// Signal that invalidates layouts using this delegate when notified.
    fn relayout(&self) -> Option<&RelayoutSignal> {
        None
    }

    fn debug_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Invalidation channel a delegate can expose when its output depends on
/// state that changes without the delegate being replaced.
#[derive(Clone, Debug, Default)]
pub struct RelayoutSignal {
    generation: Rc<Cell<u64>>,
}

impl RelayoutSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks every container observing this signal as needing layout.
    pub fn notify(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }
}

/// A delegate together with the state of the pass it is currently running.
///
/// Hosts are shared through `Rc`, so one delegate instance may drive several
/// containers, including a container nested inside another one it lays out.
/// Each pass installs its own state and puts the previous one back when it
/// ends.
pub struct DelegateHost<Id, D> {
    delegate: D,
    pass: RefCell<PassState<Id>>,
}

impl<Id: ChildId, D: MultiChildLayoutDelegate<Id>> DelegateHost<Id, D> {
    pub fn new(delegate: D) -> Self {
        Self {
            delegate,
            pass: RefCell::new(PassState::default()),
        }
    }

    pub fn shared(delegate: D) -> Rc<Self> {
        Rc::new(Self::new(delegate))
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// True while a pass driven by this host is on the call stack.
    pub fn is_in_pass(&self) -> bool {
        self.pass.borrow().is_active()
    }

    /// Runs one pass over `children` for a container of `size`.
    pub(crate) fn run_pass(
        &self,
        size: Size,
        children: &mut [LayoutChild<Id>],
    ) -> Result<(), LayoutError<Id>> {
        for child in children.iter_mut() {
            child.reset_geometry();
        }
        let state = PassState::build(children)?;
        let guard = PassGuard::install(&self.pass, state);
        log::trace!(
            "{}: performing layout of {} children at {size}",
            self.delegate.debug_name(),
            children.len()
        );

        let mut cx = LayoutContext::new(&self.pass, children, size);
        self.delegate.perform_layout(&mut cx, size)?;
        guard.finish(children)
    }
}

impl<Id, D> fmt::Debug for DelegateHost<Id, D>
where
    Id: ChildId,
    D: MultiChildLayoutDelegate<Id>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegateHost")
            .field("delegate", &self.delegate.debug_name())
            .field("in_pass", &self.is_in_pass())
            .finish()
    }
}
