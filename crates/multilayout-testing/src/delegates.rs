//! Delegates whose layout is supplied by a closure.

use multilayout_ui::{
    ChildId, Constraints, LayoutContext, LayoutError, MultiChildLayoutDelegate, RelayoutSignal,
    Size,
};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

type LayoutScript<Id> = dyn Fn(&mut LayoutContext<'_, Id>, Size) -> Result<(), LayoutError<Id>>;

/// A delegate that runs a closure as its `perform_layout`.
///
/// `config` stands in for the delegate's configuration: two scripted
/// delegates ask for relayout exactly when their configs or fixed sizes
/// differ. Clones share the script and the run counter.
pub struct ScriptedDelegate<Id> {
    config: u64,
    size: Option<Size>,
    script: Rc<LayoutScript<Id>>,
    signal: Option<RelayoutSignal>,
    runs: Rc<Cell<usize>>,
}

impl<Id: ChildId> ScriptedDelegate<Id> {
    pub fn new<F>(config: u64, script: F) -> Self
    where
        F: Fn(&mut LayoutContext<'_, Id>, Size) -> Result<(), LayoutError<Id>> + 'static,
    {
        Self {
            config,
            size: None,
            script: Rc::new(script),
            signal: None,
            runs: Rc::new(Cell::new(0)),
        }
    }

    /// Makes `resolve_size` return `size` instead of the biggest allowed size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_signal(mut self, signal: &RelayoutSignal) -> Self {
        self.signal = Some(signal.clone());
        self
    }

    pub fn config(&self) -> u64 {
        self.config
    }

    /// Number of times the script ran.
    pub fn runs(&self) -> usize {
        self.runs.get()
    }
}

impl<Id> Clone for ScriptedDelegate<Id> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            size: self.size,
            script: Rc::clone(&self.script),
            signal: self.signal.clone(),
            runs: Rc::clone(&self.runs),
        }
    }
}

impl<Id: ChildId> MultiChildLayoutDelegate<Id> for ScriptedDelegate<Id> {
    fn resolve_size(&self, constraints: Constraints) -> Size {
        self.size.unwrap_or_else(|| constraints.biggest())
    }

    fn perform_layout(
        &self,
        cx: &mut LayoutContext<'_, Id>,
        size: Size,
    ) -> Result<(), LayoutError<Id>> {
        self.runs.set(self.runs.get() + 1);
        (self.script)(cx, size)
    }

    fn should_relayout(&self, previous: &Self) -> bool {
        self.config != previous.config || self.size != previous.size
    }

    fn relayout(&self) -> Option<&RelayoutSignal> {
        self.signal.as_ref()
    }

    fn debug_name(&self) -> &str {
        "ScriptedDelegate"
    }
}

impl<Id> fmt::Debug for ScriptedDelegate<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedDelegate")
            .field("config", &self.config)
            .field("size", &self.size)
            .field("runs", &self.runs.get())
            .finish()
    }
}
