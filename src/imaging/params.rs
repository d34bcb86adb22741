//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides which crops and canvases to produce) and the
//! [`backend`](super::backend) (which does the actual pixel work).
//!
//! ## Types
//!
//! - [`BorderPercent`]: Overview border as a fraction of the source width (default 0.05).
//! - [`ColumnRange`]: Half-open pixel column span `[left, right)` of one slice.
//! - [`CropRect`]: Rectangle handed to [`ImageBackend::crop`](super::ImageBackend::crop).
//! - [`Offset`]: Top-left paste position on a canvas.

/// Canvas fill for overview images.
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Overview border width as a fraction of the source image width.
///
/// Valid values are finite and within `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderPercent(f64);

impl BorderPercent {
    pub const DEFAULT: f64 = 0.05;

    /// Returns `None` for NaN, infinities and values outside `[0, 1)`.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && (0.0..1.0).contains(&value)).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for BorderPercent {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Pixel columns `[left, right)` covered by one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRange {
    pub left: u32,
    pub right: u32,
}

impl ColumnRange {
    pub fn width(self) -> u32 {
        self.right - self.left
    }
}

/// Rectangle in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Full-height rectangle spanning `columns`.
    pub fn full_height(columns: ColumnRange, height: u32) -> Self {
        Self {
            x: columns.left,
            y: 0,
            width: columns.width(),
            height,
        }
    }
}

/// Top-left position of a pasted image on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub x: u32,
    pub y: u32,
}
