//! Image processing in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Classify** | [`classify`] (ratio within 0.01 of 2.4 or 1.6) |
//! | **Slice** | `crop_imm` per column range, encode with input format |
//! | **Overview** | white RGB canvas + `imageops::replace` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for layout and canvas math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{
    LayoutError, LayoutMode, OverviewGeometry, RATIO_TOLERANCE, calculate_overview_geometry,
    calculate_slice_columns, classify,
};
pub use operations::{
    ImagingError, SliceOutput, SlicePlan, WrittenOverview, WrittenSlice, compose_overview,
    plan_overview, plan_slices, slice_image,
};
pub use params::{BorderPercent, ColumnRange, CropRect, Offset, WHITE};
pub use rust_backend::RustBackend;
