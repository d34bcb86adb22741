//! Pure calculation functions for slice and overview geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::{BorderPercent, ColumnRange, Offset};
use thiserror::Error;

/// Absolute tolerance when matching a width/height ratio to a layout.
pub const RATIO_TOLERANCE: f64 = 0.01;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Unsupported aspect ratio: {ratio:.2}")]
    UnsupportedRatio { ratio: f64 },
    #[error(
        "Overview canvas {canvas_width}x{canvas_height} cannot contain a {width}x{height} image"
    )]
    Geometry {
        width: u32,
        height: u32,
        canvas_width: u64,
        canvas_height: u64,
    },
}

/// How a source image is split into panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// ~12:5 panorama, three 4:5 panels.
    ThreePanel,
    /// ~8:5 panorama, two 4:5 panels.
    TwoPanel,
}

impl LayoutMode {
    /// Matched in this order.
    const ALL: [LayoutMode; 2] = [LayoutMode::ThreePanel, LayoutMode::TwoPanel];

    pub fn panel_count(self) -> u32 {
        match self {
            LayoutMode::ThreePanel => 3,
            LayoutMode::TwoPanel => 2,
        }
    }

    /// Width/height ratio this mode matches.
    pub fn target_ratio(self) -> f64 {
        match self {
            LayoutMode::ThreePanel => 2.4,
            LayoutMode::TwoPanel => 1.6,
        }
    }
}

/// Classify an image by its width/height ratio.
///
/// A zero height yields an infinite or NaN ratio, which matches nothing.
///
/// # Examples
/// ```
/// # use panel_split::imaging::{LayoutMode, classify};
/// assert_eq!(classify(2400, 1000).unwrap(), LayoutMode::ThreePanel);
/// assert_eq!(classify(1600, 1000).unwrap(), LayoutMode::TwoPanel);
/// assert!(classify(1000, 1000).is_err());
/// ```
pub fn classify(width: u32, height: u32) -> Result<LayoutMode, LayoutError> {
    let ratio = width as f64 / height as f64;
    LayoutMode::ALL
        .into_iter()
        .find(|mode| (ratio - mode.target_ratio()).abs() < RATIO_TOLERANCE)
        .ok_or(LayoutError::UnsupportedRatio { ratio })
}

/// Partition `[0, width)` into `mode.panel_count()` contiguous column ranges.
///
/// Edges are floored from the ideal fractional slice width, so panels may
/// differ by one pixel. The last right edge is pinned to `width`.
pub fn calculate_slice_columns(width: u32, mode: LayoutMode) -> Vec<ColumnRange> {
    let count = mode.panel_count();
    let slice_width = width as f64 / count as f64;
    let edge = |i: u32| (i as f64 * slice_width).floor() as u32;

    (0..count)
        .map(|i| {
            let right = if i + 1 == count { width } else { edge(i + 1) };
            ColumnRange {
                left: edge(i),
                right,
            }
        })
        .collect()
}

/// Canvas size and paste position for an overview image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewGeometry {
    /// Border on the left and right of the pasted image.
    pub border: u32,
    pub canvas_width: u32,
    /// Always `floor(canvas_width * 5 / 4)`.
    pub canvas_height: u32,
    pub offset: Offset,
}

/// Compute the 4:5 overview canvas for a source of `(width, height)`.
///
/// Fails with [`LayoutError::Geometry`] when the canvas cannot hold the
/// source without clipping.
///
/// # Examples
/// ```
/// # use panel_split::imaging::{BorderPercent, Offset, calculate_overview_geometry};
/// let g = calculate_overview_geometry((2400, 1000), BorderPercent::default()).unwrap();
/// assert_eq!((g.canvas_width, g.canvas_height), (2640, 3300));
/// assert_eq!(g.offset, Offset { x: 120, y: 1150 });
/// ```
pub fn calculate_overview_geometry(
    source: (u32, u32),
    border_percent: BorderPercent,
) -> Result<OverviewGeometry, LayoutError> {
    let (width, height) = source;
    let border = (border_percent.value() * width as f64).floor() as u32;

    let canvas_width = width as u64 + 2 * border as u64;
    // 5/4 is exact in binary, so integer division matches floor(1.25 * w)
    let canvas_height = canvas_width * 5 / 4;

    let geometry_error = || LayoutError::Geometry {
        width,
        height,
        canvas_width,
        canvas_height,
    };

    if canvas_height < height as u64 {
        return Err(geometry_error());
    }
    let canvas_width = u32::try_from(canvas_width).map_err(|_| geometry_error())?;
    let canvas_height_px = u32::try_from(canvas_height).map_err(|_| geometry_error())?;

    Ok(OverviewGeometry {
        border,
        canvas_width,
        canvas_height: canvas_height_px,
        offset: Offset {
            x: border,
            y: (canvas_height_px - height) / 2,
        },
    })
}
