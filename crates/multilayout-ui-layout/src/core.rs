//! Contract between a container and the engine that sizes its children.

use crate::constraints::Constraints;
use multilayout_ui_graphics::Size;
use std::fmt;

/// Error raised by a render box that could not complete its layout.
pub type LayoutFailure = Box<dyn std::error::Error + 'static>;

/// A node the layout engine can size.
///
/// Containers never reach into a child's internals: they hand it constraints
/// and read back the size it chose. `Debug` output is used to describe the
/// child in protocol diagnostics.
pub trait RenderBox: fmt::Debug {
    /// Sizes this box within `constraints` and returns the chosen size.
    fn layout(&mut self, constraints: Constraints) -> Result<Size, LayoutFailure>;

    /// Returns the minimum width achievable for the given height.
    fn min_intrinsic_width(&self, height: f32) -> f32;

    /// Returns the maximum width achievable for the given height.
    fn max_intrinsic_width(&self, height: f32) -> f32;

    /// Returns the minimum height achievable for the given width.
    fn min_intrinsic_height(&self, width: f32) -> f32;

    /// Returns the maximum height achievable for the given width.
    fn max_intrinsic_height(&self, width: f32) -> f32;
}
