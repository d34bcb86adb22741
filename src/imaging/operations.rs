//! High-level image operations.
//!
//! These functions combine calculations with backend execution: classify the
//! source, compute geometry, then crop/paste and encode through the backend.
//! Both operations classify independently and only read the source image.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{
    LayoutError, LayoutMode, OverviewGeometry, calculate_overview_geometry,
    calculate_slice_columns, classify,
};
use super::params::{BorderPercent, ColumnRange, CropRect, WHITE};
use crate::naming::{NamingError, OVERVIEW_SUFFIX, output_path, slice_suffix};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Naming(#[from] NamingError),
}

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, ImagingError>;

/// Layout and column ranges for a source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlicePlan {
    pub mode: LayoutMode,
    pub columns: Vec<ColumnRange>,
}

/// Plan the slices of a source without touching pixels.
pub fn plan_slices(dims: Dimensions) -> Result<SlicePlan> {
    let mode = classify(dims.width, dims.height)?;
    Ok(SlicePlan {
        mode,
        columns: calculate_slice_columns(dims.width, mode),
    })
}

/// Plan the overview canvas of a source without touching pixels.
///
/// Classification only validates the ratio; both layouts share the same
/// canvas math.
pub fn plan_overview(dims: Dimensions, border: BorderPercent) -> Result<OverviewGeometry> {
    classify(dims.width, dims.height)?;
    Ok(calculate_overview_geometry(
        (dims.width, dims.height),
        border,
    )?)
}

/// One slice written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenSlice {
    /// 1-based, matches the `_slice_N` suffix.
    pub index: u32,
    pub columns: ColumnRange,
    pub path: PathBuf,
}

/// Slices written for one source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceOutput {
    pub mode: LayoutMode,
    pub slices: Vec<WrittenSlice>,
}

/// Crop `image` into equal full-height panels and encode each one.
///
/// Files are named `<stem>_slice_<N>.<ext>` after `source` inside
/// `output_dir`. Slices already written stay on disk if a later one fails.
pub fn slice_image<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    source: &Path,
    output_dir: &Path,
) -> Result<SliceOutput> {
    let dims = backend.dimensions(image);
    let SlicePlan { mode, columns } = plan_slices(dims)?;

    let targets = (1..=mode.panel_count())
        .map(|index| output_path(output_dir, source, &slice_suffix(index)))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut slices = Vec::with_capacity(columns.len());
    for ((index, columns), path) in (1..).zip(columns).zip(targets) {
        let cropped = backend.crop(image, CropRect::full_height(columns, dims.height))?;
        backend.encode(&cropped, &path)?;
        slices.push(WrittenSlice {
            index,
            columns,
            path,
        });
    }

    Ok(SliceOutput { mode, slices })
}

/// Overview image written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOverview {
    pub geometry: OverviewGeometry,
    pub path: PathBuf,
}

/// Paste `image` onto a white 4:5 canvas and encode it as
/// `<stem>_overview.<ext>` inside `output_dir`.
pub fn compose_overview<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    source: &Path,
    output_dir: &Path,
    border: BorderPercent,
) -> Result<WrittenOverview> {
    let geometry = plan_overview(backend.dimensions(image), border)?;
    let path = output_path(output_dir, source, OVERVIEW_SUFFIX)?;

    let mut canvas = backend.new_canvas(geometry.canvas_width, geometry.canvas_height, WHITE);
    backend.paste(&mut canvas, image, geometry.offset)?;
    backend.encode(&canvas, &path)?;

    Ok(WrittenOverview { geometry, path })
}
