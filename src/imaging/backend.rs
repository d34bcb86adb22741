//! Image codec backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the pixel capability the rest of the crate
//! is written against: decode, crop, blank canvas, paste and encode. Geometry
//! is decided in [`calculations`](super::calculations); the backend only
//! moves pixels.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use super::params::{CropRect, Offset};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Width and height of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image codec backends.
///
/// Implementations own their image representation through [`Self::Image`],
/// so tests can run the full slicing logic against a recording mock without
/// touching pixels.
pub trait ImageBackend {
    /// Decoded, in-memory image.
    type Image;

    /// Whether `path` has an extension this backend can both read and write.
    fn supports(&self, _path: &Path) -> bool {
        true
    }

    /// Load and decode an image from disk.
    fn decode(&self, path: &Path) -> Result<Self::Image, BackendError>;

    fn dimensions(&self, image: &Self::Image) -> Dimensions;

    /// Copy `rect` out of `image`. Fails if `rect` is not inside the image.
    fn crop(&self, image: &Self::Image, rect: CropRect) -> Result<Self::Image, BackendError>;

    /// Allocate an RGB canvas filled with a solid color.
    fn new_canvas(&self, width: u32, height: u32, fill: [u8; 3]) -> Self::Image;

    /// Overwrite canvas pixels with `image` at `offset`. No blending.
    fn paste(
        &self,
        canvas: &mut Self::Image,
        image: &Self::Image,
        offset: Offset,
    ) -> Result<(), BackendError>;

    /// Encode `image` to `path`, choosing the format from the extension.
    fn encode(&self, image: &Self::Image, path: &Path) -> Result<(), BackendError>;
}
