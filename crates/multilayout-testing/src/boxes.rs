//! Render boxes with canned behavior.

use multilayout_ui::{Constraints, LayoutFailure, RenderBox, Size};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared record of the constraints a fake child was laid out with.
#[derive(Clone, Debug, Default)]
pub struct MeasureLog {
    calls: Rc<RefCell<Vec<Constraints>>>,
}

impl MeasureLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last(&self) -> Option<Constraints> {
        self.calls.borrow().last().copied()
    }

    pub fn calls(&self) -> Vec<Constraints> {
        self.calls.borrow().clone()
    }

    fn record(&self, constraints: Constraints) {
        self.calls.borrow_mut().push(constraints);
    }
}

/// A leaf that wants a fixed size and takes the closest size the
/// constraints allow.
pub struct FixedBox {
    name: String,
    preferred: Size,
    log: MeasureLog,
}

impl FixedBox {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            preferred: Size::new(width, height),
            log: MeasureLog::new(),
        }
    }

    pub fn with_log(mut self, log: &MeasureLog) -> Self {
        self.log = log.clone();
        self
    }

    pub fn log(&self) -> &MeasureLog {
        &self.log
    }
}

impl fmt::Debug for FixedBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FixedBox({} {}x{})",
            self.name, self.preferred.width, self.preferred.height
        )
    }
}

impl RenderBox for FixedBox {
    fn layout(&mut self, constraints: Constraints) -> Result<Size, LayoutFailure> {
        self.log.record(constraints);
        Ok(constraints.constrain_size(self.preferred))
    }

    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        self.preferred.width
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        self.preferred.width
    }

    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        self.preferred.height
    }

    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        self.preferred.height
    }
}

/// A leaf whose layout always fails with the given message.
#[derive(Debug)]
pub struct FailingBox {
    message: String,
}

impl FailingBox {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl RenderBox for FailingBox {
    fn layout(&mut self, _constraints: Constraints) -> Result<Size, LayoutFailure> {
        Err(self.message.clone().into())
    }

    fn min_intrinsic_width(&self, _height: f32) -> f32 {
        0.0
    }

    fn max_intrinsic_width(&self, _height: f32) -> f32 {
        0.0
    }

    fn min_intrinsic_height(&self, _width: f32) -> f32 {
        0.0
    }

    fn max_intrinsic_height(&self, _width: f32) -> f32 {
        0.0
    }
}
