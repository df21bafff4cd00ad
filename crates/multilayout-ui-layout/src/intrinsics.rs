//! Intrinsic measurement APIs

use crate::Axis;

/// One of the four intrinsic dimension queries a render box answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicDimension {
    /// Smallest width for a given height.
    MinWidth,
    /// Width beyond which growing no longer reduces the height.
    MaxWidth,
    /// Smallest height for a given width.
    MinHeight,
    /// Height beyond which growing no longer reduces the width.
    MaxHeight,
}

impl IntrinsicDimension {
    /// Axis along which the answer is measured.
    pub fn axis(self) -> Axis {
        match self {
            IntrinsicDimension::MinWidth | IntrinsicDimension::MaxWidth => Axis::Horizontal,
            IntrinsicDimension::MinHeight | IntrinsicDimension::MaxHeight => Axis::Vertical,
        }
    }

    /// Axis whose extent is fixed by the query argument.
    pub fn fixed_axis(self) -> Axis {
        self.axis().cross_axis()
    }
}
