//! Layout constraints system

use multilayout_ui_graphics::Size;
use std::fmt;

/// Box constraints handed from a container to a child.
///
/// A child's measured size must satisfy
/// `min_width <= width <= max_width` and `min_height <= height <= max_height`.
/// An infinite maximum leaves the axis unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Constraints that accept any size.
    pub const UNBOUNDED: Constraints = Constraints {
        min_width: 0.0,
        max_width: f32::INFINITY,
        min_height: 0.0,
        max_height: f32::INFINITY,
    };

    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Tight on every axis whose value is finite, unconstrained on the rest.
    ///
    /// Pass `f32::INFINITY` to leave an axis open.
    pub fn tight_for_finite(width: f32, height: f32) -> Self {
        let (min_width, max_width) = if width.is_finite() {
            (width, width)
        } else {
            (0.0, f32::INFINITY)
        };
        let (min_height, max_height) = if height.is_finite() {
            (height, height)
        } else {
            (0.0, f32::INFINITY)
        };
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Returns true if these constraints have a single size that satisfies them.
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Returns true if the width is bounded (max_width is finite).
    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Largest size these constraints allow. May be infinite.
    pub fn biggest(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }

    /// Smallest size these constraints allow.
    pub fn smallest(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// Constrains the provided width and height to fit within these constraints.
    ///
    /// Never panics: when a maximum is below its minimum the maximum wins,
    /// and NaN bounds are ignored.
    pub fn constrain(&self, width: f32, height: f32) -> (f32, f32) {
        (
            width.max(self.min_width).min(self.max_width),
            height.max(self.min_height).min(self.max_height),
        )
    }

    /// [`Constraints::constrain`] for a [`Size`].
    pub fn constrain_size(&self, size: Size) -> Size {
        let (width, height) = self.constrain(size.width, size.height);
        Size::new(width, height)
    }

    /// Creates new constraints with tightened width (min = max = given width).
    pub fn tighten_width(self, width: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            ..self
        }
    }

    /// Returns true if [`Constraints::validate`] would accept these constraints.
    pub fn is_normalized(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks that these constraints can be applied to a child.
    ///
    /// Minimums must be finite and non-negative, maximums must not be below
    /// their minimum, and no bound may be NaN.
    pub fn validate(&self) -> Result<(), ConstraintsViolation> {
        let bounds = [
            self.min_width,
            self.max_width,
            self.min_height,
            self.max_height,
        ];
        if bounds.iter().any(|value| value.is_nan()) {
            return Err(ConstraintsViolation::NotANumber);
        }
        if self.min_width < 0.0 {
            return Err(ConstraintsViolation::NegativeMinWidth(self.min_width));
        }
        if self.min_height < 0.0 {
            return Err(ConstraintsViolation::NegativeMinHeight(self.min_height));
        }
        if self.min_width.is_infinite() {
            return Err(ConstraintsViolation::InfiniteMinWidth);
        }
        if self.min_height.is_infinite() {
            return Err(ConstraintsViolation::InfiniteMinHeight);
        }
        if self.max_width < self.min_width {
            return Err(ConstraintsViolation::MaxWidthBelowMin {
                min: self.min_width,
                max: self.max_width,
            });
        }
        if self.max_height < self.min_height {
            return Err(ConstraintsViolation::MaxHeightBelowMin {
                min: self.min_height,
                max: self.max_height,
            });
        }
        Ok(())
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_tight() {
            return write!(f, "Constraints(tight {}x{})", self.min_width, self.min_height);
        }
        write!(
            f,
            "Constraints({}<=w<={}, {}<=h<={})",
            self.min_width, self.max_width, self.min_height, self.max_height
        )
    }
}

/// The rule a set of [`Constraints`] breaks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConstraintsViolation {
    NotANumber,
    NegativeMinWidth(f32),
    NegativeMinHeight(f32),
    InfiniteMinWidth,
    InfiniteMinHeight,
    MaxWidthBelowMin { min: f32, max: f32 },
    MaxHeightBelowMin { min: f32, max: f32 },
}

impl fmt::Display for ConstraintsViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintsViolation::NotANumber => write!(f, "a bound is NaN"),
            ConstraintsViolation::NegativeMinWidth(value) => {
                write!(f, "minimum width {value} is negative")
            }
            ConstraintsViolation::NegativeMinHeight(value) => {
                write!(f, "minimum height {value} is negative")
            }
            ConstraintsViolation::InfiniteMinWidth => write!(f, "minimum width is infinite"),
            ConstraintsViolation::InfiniteMinHeight => write!(f, "minimum height is infinite"),
            ConstraintsViolation::MaxWidthBelowMin { min, max } => {
                write!(f, "maximum width {max} is below minimum width {min}")
            }
            ConstraintsViolation::MaxHeightBelowMin { min, max } => {
                write!(f, "maximum height {max} is below minimum height {min}")
            }
        }
    }
}

impl std::error::Error for ConstraintsViolation {}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
