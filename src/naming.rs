//! Output file naming.
//!
//! Every generated file is named after the source image: its file stem, a
//! role suffix, then the original extension.
//!
//! - `pano.jpg` → `pano_slice_1.jpg`, `pano_slice_2.jpg`, `pano_slice_3.jpg`
//! - `pano.jpg` → `pano_overview.jpg`
//! - `trip.v2.png` → `trip.v2_overview.png` (only the last extension is split off)
//!
//! Directories in the source path are dropped; outputs land flat in the
//! output directory.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Suffix of the overview image.
pub const OVERVIEW_SUFFIX: &str = "_overview";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NamingError {
    #[error("Cannot derive an output name from {}", .0.display())]
    InvalidSourceName(PathBuf),
}

/// Suffix for the 1-based slice `index`.
pub fn slice_suffix(index: u32) -> String {
    format!("_slice_{index}")
}

/// Build `<stem><suffix>.<ext>` from the file name of `source`.
///
/// Sources without an extension produce names without one. Fails when the
/// source has no file name or it is not valid UTF-8.
pub fn output_file_name(source: &Path, suffix: &str) -> Result<String, NamingError> {
    let invalid = || NamingError::InvalidSourceName(source.to_path_buf());

    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(invalid)?;

    match source.extension() {
        Some(ext) => {
            let ext = ext.to_str().ok_or_else(invalid)?;
            Ok(format!("{stem}{suffix}.{ext}"))
        }
        None => Ok(format!("{stem}{suffix}")),
    }
}

/// Join [`output_file_name`] onto `output_dir`.
pub fn output_path(output_dir: &Path, source: &Path, suffix: &str) -> Result<PathBuf, NamingError> {
    Ok(output_dir.join(output_file_name(source, suffix)?))
}
