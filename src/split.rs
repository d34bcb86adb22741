//! The split pipeline: one source image in, slices and an overview out.
//!
//! ```text
//! source.jpg ──decode──▶ image ──┬─▶ slice_image     → output/source_slice_{1,2,3}.jpg
//!                                └─▶ compose_overview → output/source_overview.jpg
//! ```
//!
//! The image is decoded once and shared read-only by both steps. Each step
//! classifies the aspect ratio on its own. The first error aborts the run;
//! files already written are left in place.

use crate::config::{ConfigError, SplitConfig};
use crate::imaging::{
    BorderPercent, Dimensions, ImageBackend, ImagingError, LayoutMode, RustBackend,
    WrittenOverview, WrittenSlice, compose_overview, slice_image,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("File '{}' not found.", .0.display())]
    FileNotFound(PathBuf),
    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Imaging(#[from] ImagingError),
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOptions {
    pub output_dir: PathBuf,
    pub border: BorderPercent,
}

impl SplitOptions {
    /// Build options from a config, validating the border.
    pub fn from_config(config: &SplitConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            output_dir: config.output_dir.clone(),
            border: config.border_percent()?,
        })
    }
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            output_dir: SplitConfig::default().output_dir,
            border: BorderPercent::default(),
        }
    }
}

/// Everything produced for one source image.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitReport {
    pub source: PathBuf,
    pub dimensions: Dimensions,
    pub mode: LayoutMode,
    pub slices: Vec<WrittenSlice>,
    pub overview: WrittenOverview,
}

/// Split `source` with the production [`RustBackend`].
pub fn split(source: &Path, options: &SplitOptions) -> Result<SplitReport, SplitError> {
    split_with_backend(&RustBackend::new(), source, options)
}

/// Split `source` using a specific backend (allows testing with mock).
pub fn split_with_backend<B: ImageBackend>(
    backend: &B,
    source: &Path,
    options: &SplitOptions,
) -> Result<SplitReport, SplitError> {
    if !source.exists() {
        return Err(SplitError::FileNotFound(source.to_path_buf()));
    }
    if !backend.supports(source) {
        return Err(SplitError::UnsupportedFormat(source.to_path_buf()));
    }

    std::fs::create_dir_all(&options.output_dir)?;

    let image = backend.decode(source).map_err(ImagingError::from)?;
    let dimensions = backend.dimensions(&image);

    let sliced = slice_image(backend, &image, source, &options.output_dir)?;
    let overview = compose_overview(
        backend,
        &image,
        source,
        &options.output_dir,
        options.border,
    )?;

    Ok(SplitReport {
        source: source.to_path_buf(),
        dimensions,
        mode: sliced.mode,
        slices: sliced.slices,
        overview,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::LayoutError;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use tempfile::TempDir;

    /// Empty file standing in for a source; the mock never reads it.
    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"").unwrap();
        path
    }

    fn options_in(dir: &Path) -> SplitOptions {
        SplitOptions {
            output_dir: dir.join("output"),
            ..SplitOptions::default()
        }
    }

    #[test]
    fn missing_source_is_reported_first() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::with_image(2400, 1000);
        let missing = tmp.path().join("nope.jpg");

        let result = split_with_backend(&backend, &missing, &options_in(tmp.path()));

        assert!(matches!(result, Err(SplitError::FileNotFound(_))));
        assert!(backend.get_operations().is_empty());
        assert!(!tmp.path().join("output").exists());
    }

    #[test]
    fn missing_source_message() {
        let err = SplitError::FileNotFound(PathBuf::from("pano.jpg"));
        assert_eq!(err.to_string(), "File 'pano.jpg' not found.");
    }

    #[test]
    fn decodes_once_then_slices_then_overview() {
        let tmp = TempDir::new().unwrap();
        let source = touch(tmp.path(), "pano.jpg");
        let backend = MockBackend::with_image(2400, 1000);

        let report = split_with_backend(&backend, &source, &options_in(tmp.path())).unwrap();

        assert_eq!(report.mode, LayoutMode::ThreePanel);
        assert_eq!(report.slices.len(), 3);
        assert_eq!(
            report.dimensions,
            Dimensions {
                width: 2400,
                height: 1000
            }
        );

        let ops = backend.get_operations();
        let decodes = ops
            .iter()
            .filter(|op| matches!(op, RecordedOp::Decode(_)))
            .count();
        assert_eq!(decodes, 1);
        assert!(matches!(ops[0], RecordedOp::Decode(_)));
        assert!(matches!(
            ops.last(),
            Some(RecordedOp::Encode { path, .. }) if path.ends_with("pano_overview.jpg")
        ));
        assert!(tmp.path().join("output").is_dir());
    }

    #[test]
    fn unsupported_ratio_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let source = touch(tmp.path(), "square.jpg");
        let backend = MockBackend::with_image(1000, 1000);

        let result = split_with_backend(&backend, &source, &options_in(tmp.path()));

        assert!(matches!(
            result,
            Err(SplitError::Imaging(ImagingError::Layout(
                LayoutError::UnsupportedRatio { .. }
            )))
        ));
        assert!(backend.encoded_paths().is_empty());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Unsupported aspect ratio: 1.00"
        );
    }

    #[test]
    fn overview_failure_keeps_slices() {
        let tmp = TempDir::new().unwrap();
        let source = touch(tmp.path(), "pano.jpg");
        let backend = MockBackend::with_image(1600, 1000).failing_encode("_overview");

        let result = split_with_backend(&backend, &source, &options_in(tmp.path()));

        assert!(result.is_err());
        assert_eq!(backend.encoded_paths().len(), 2);
    }

    #[test]
    fn options_from_config_validates_border() {
        let mut config = SplitConfig::default();
        config.overview.border_percent = 2.0;
        assert!(SplitOptions::from_config(&config).is_err());

        config.overview.border_percent = 0.1;
        let options = SplitOptions::from_config(&config).unwrap();
        assert_eq!(options.border.value(), 0.1);
        assert_eq!(options.output_dir, PathBuf::from("output"));
    }
}
