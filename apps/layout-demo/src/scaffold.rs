//! A page scaffold: header on top, footer at the bottom, body in between,
//! and an optional floating action button over the body's bottom-right
//! corner.

use multilayout_ui::{
    Constraints, LayoutContext, LayoutError, LayoutFailure, MultiChildLayoutDelegate, Point,
    RenderBox, Size,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Header,
    Body,
    Footer,
    Fab,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScaffoldDelegate {
    pub fab_margin: f32,
}

impl MultiChildLayoutDelegate<Slot> for ScaffoldDelegate {
    fn perform_layout(
        &self,
        cx: &mut LayoutContext<'_, Slot>,
        size: Size,
    ) -> Result<(), LayoutError<Slot>> {
        let full_width = Constraints::loose(size.width, size.height).tighten_width(size.width);

        let mut header_height = 0.0;
        if cx.has_child(&Slot::Header) {
            header_height = cx.layout_child(&Slot::Header, full_width)?.height;
            cx.position_child(&Slot::Header, Point::ZERO)?;
        }

        let mut footer_height = 0.0;
        if cx.has_child(&Slot::Footer) {
            footer_height = cx.layout_child(&Slot::Footer, full_width)?.height;
            cx.position_child(&Slot::Footer, Point::new(0.0, size.height - footer_height))?;
        }

        let body_height = (size.height - header_height - footer_height).max(0.0);
        if cx.has_child(&Slot::Body) {
            cx.layout_child(&Slot::Body, Constraints::tight(size.width, body_height))?;
            cx.position_child(&Slot::Body, Point::new(0.0, header_height))?;
        }

        if cx.has_child(&Slot::Fab) {
            let fab = cx.layout_child(&Slot::Fab, Constraints::loose(size.width, body_height))?;
            let x = size.width - fab.width - self.fab_margin;
            let y = header_height + body_height - fab.height - self.fab_margin;
            cx.position_child(&Slot::Fab, Point::new(x.max(0.0), y.max(header_height)))?;
        }
        Ok(())
    }

    fn should_relayout(&self, previous: &Self) -> bool {
        self != previous
    }

    fn debug_name(&self) -> &str {
        "ScaffoldDelegate"
    }
}

/// A leaf with a preferred size, standing in for real content.
#[derive(Debug)]
pub struct Placeholder {
    pub label: &'static str,
    pub preferred: Size,
}

impl Placeholder {
    pub fn new(label: &'static str, width: f32, height: f32) -> Self {
        Self {
            label,
            preferred: Size::new(width, height),
        }
    }
}

impl RenderBox for Placeholder {
    fn layout(&mut self, constraints: Constraints) -> Result<Size, LayoutFailure> {
        let size = constraints.constrain_size(self.preferred);
        log::trace!("{} placeholder measured at {size} under {constraints}", self.label);
        Ok(size)
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
