//! Pure Rust codec backend on top of the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Canvas | `image::RgbImage::from_pixel` |
//! | Paste | `image::imageops::replace` on RGB8 |
//! | Encode | `image::DynamicImage::write_to`, format from extension |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{CropRect, Offset};
use image::{DynamicImage, ImageFormat, ImageReader, Rgb, RgbImage};
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

/// Extensions we map to a codec. Output always reuses the input extension,
/// so a format is only usable when it can be both read and written.
const CODEC_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    CODEC_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled() && fmt.writing_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the image file extensions that can be round-tripped.
pub fn supported_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

fn format_for(path: &Path) -> Option<ImageFormat> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    CODEC_CANDIDATES
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, fmt)| *fmt)
        .filter(|_| supported_extensions().iter().any(|e| *e == ext))
}

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    type Image = DynamicImage;

    fn supports(&self, path: &Path) -> bool {
        format_for(path).is_some()
    }

    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        ImageReader::open(path)
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| {
                BackendError::ProcessingFailed(format!(
                    "Failed to decode {}: {}",
                    path.display(),
                    e
                ))
            })
    }

    fn dimensions(&self, image: &DynamicImage) -> Dimensions {
        Dimensions {
            width: image.width(),
            height: image.height(),
        }
    }

    fn crop(&self, image: &DynamicImage, rect: CropRect) -> Result<DynamicImage, BackendError> {
        let fits_x = rect.x.checked_add(rect.width).is_some_and(|r| r <= image.width());
        let fits_y = rect.y.checked_add(rect.height).is_some_and(|b| b <= image.height());
        if !(fits_x && fits_y) {
            return Err(BackendError::ProcessingFailed(format!(
                "Crop {}x{}+{}+{} outside {}x{} image",
                rect.width,
                rect.height,
                rect.x,
                rect.y,
                image.width(),
                image.height()
            )));
        }
        Ok(image.crop_imm(rect.x, rect.y, rect.width, rect.height))
    }

    fn new_canvas(&self, width: u32, height: u32, fill: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(fill)))
    }

    fn paste(
        &self,
        canvas: &mut DynamicImage,
        image: &DynamicImage,
        offset: Offset,
    ) -> Result<(), BackendError> {
        let DynamicImage::ImageRgb8(buffer) = canvas else {
            return Err(BackendError::ProcessingFailed(
                "Paste target must be an RGB canvas".into(),
            ));
        };
        let fits_x = offset.x as u64 + image.width() as u64 <= buffer.width() as u64;
        let fits_y = offset.y as u64 + image.height() as u64 <= buffer.height() as u64;
        if !(fits_x && fits_y) {
            return Err(BackendError::ProcessingFailed(format!(
                "Paste of {}x{} at ({}, {}) outside {}x{} canvas",
                image.width(),
                image.height(),
                offset.x,
                offset.y,
                buffer.width(),
                buffer.height()
            )));
        }
        // Alpha is dropped, matching a plain RGB overwrite
        image::imageops::replace(buffer, &image.to_rgb8(), offset.x as i64, offset.y as i64);
        Ok(())
    }

    fn encode(&self, image: &DynamicImage, path: &Path) -> Result<(), BackendError> {
        let format = format_for(path).ok_or_else(|| {
            BackendError::ProcessingFailed(format!(
                "Unsupported output format: {}",
                path.display()
            ))
        })?;
        let file = std::fs::File::create(path).map_err(BackendError::Io)?;
        let mut writer = std::io::BufWriter::new(file);
        image.write_to(&mut writer, format).map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "Failed to encode {}: {}",
                path.display(),
                e
            ))
        })?;
        writer.flush().map_err(BackendError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::params::WHITE;

    /// Gradient image so crops can be checked pixel by pixel.
    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        }))
    }

    #[test]
    fn supported_extensions_include_common_formats() {
        let exts = supported_extensions();
        for expected in &["jpg", "jpeg", "png", "tif", "tiff", "webp"] {
            assert!(
                exts.contains(expected),
                "expected {expected} in supported extensions"
            );
        }
    }

    #[test]
    fn supports_is_case_insensitive() {
        let backend = RustBackend::new();
        assert!(backend.supports(Path::new("pano.JPG")));
        assert!(backend.supports(Path::new("dir/pano.png")));
        assert!(!backend.supports(Path::new("pano.gif")));
        assert!(!backend.supports(Path::new("pano")));
    }

    #[test]
    fn decode_synthetic_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.png");
        gradient(240, 100).save(&path).unwrap();

        let backend = RustBackend::new();
        let image = backend.decode(&path).unwrap();
        assert_eq!(
            backend.dimensions(&image),
            Dimensions {
                width: 240,
                height: 100
            }
        );
    }

    #[test]
    fn decode_nonexistent_file_errors() {
        let backend = RustBackend::new();
        let result = backend.decode(Path::new("/nonexistent/image.png"));
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[test]
    fn decode_corrupt_file_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();

        let result = RustBackend::new().decode(&path);
        assert!(matches!(result, Err(BackendError::ProcessingFailed(_))));
    }

    #[test]
    fn crop_copies_expected_pixels() {
        let backend = RustBackend::new();
        let source = gradient(240, 100);
        let rect = CropRect {
            x: 80,
            y: 0,
            width: 80,
            height: 100,
        };

        let cropped = backend.crop(&source, rect).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (80, 100));
        let rgb = cropped.to_rgb8();
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([80, 0, 128]));
        assert_eq!(rgb.get_pixel(79, 99), &Rgb([159, 99, 128]));
    }

    #[test]
    fn crop_outside_image_errors() {
        let backend = RustBackend::new();
        let rect = CropRect {
            x: 200,
            y: 0,
            width: 80,
            height: 100,
        };
        assert!(backend.crop(&gradient(240, 100), rect).is_err());
    }

    #[test]
    fn new_canvas_is_solid_rgb() {
        let canvas = RustBackend::new().new_canvas(4, 5, WHITE);
        let DynamicImage::ImageRgb8(buffer) = canvas else {
            panic!("expected RGB8 canvas");
        };
        assert!(buffer.pixels().all(|p| *p == Rgb(WHITE)));
        assert_eq!(buffer.dimensions(), (4, 5));
    }

    #[test]
    fn paste_overwrites_region_only() {
        let backend = RustBackend::new();
        let mut canvas = backend.new_canvas(30, 40, WHITE);
        let tile = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([1, 2, 3])));

        backend
            .paste(&mut canvas, &tile, Offset { x: 10, y: 15 })
            .unwrap();

        let rgb = canvas.to_rgb8();
        assert_eq!(rgb.get_pixel(10, 15), &Rgb([1, 2, 3]));
        assert_eq!(rgb.get_pixel(19, 24), &Rgb([1, 2, 3]));
        assert_eq!(rgb.get_pixel(9, 15), &Rgb(WHITE));
        assert_eq!(rgb.get_pixel(20, 24), &Rgb(WHITE));
        assert_eq!(rgb.get_pixel(10, 25), &Rgb(WHITE));
    }

    #[test]
    fn paste_drops_alpha() {
        let backend = RustBackend::new();
        let mut canvas = backend.new_canvas(2, 2, WHITE);
        let tile = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            1,
            1,
            image::Rgba([10, 20, 30, 0]),
        ));

        backend.paste(&mut canvas, &tile, Offset { x: 1, y: 1 }).unwrap();
        assert_eq!(canvas.to_rgb8().get_pixel(1, 1), &Rgb([10, 20, 30]));
    }

    #[test]
    fn paste_outside_canvas_errors() {
        let backend = RustBackend::new();
        let mut canvas = backend.new_canvas(10, 10, WHITE);
        let tile = gradient(5, 5);
        assert!(backend.paste(&mut canvas, &tile, Offset { x: 6, y: 0 }).is_err());
    }

    #[test]
    fn encode_png_round_trips_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.png");
        let backend = RustBackend::new();

        backend.encode(&gradient(64, 48), &path).unwrap();

        let decoded = backend.decode(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 48));
    }

    #[test]
    fn encode_jpeg_writes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.jpg");

        RustBackend::new().encode(&gradient(64, 48), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn encode_unsupported_format_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.gif");

        let result = RustBackend::new().encode(&gradient(8, 8), &path);
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn encode_into_missing_directory_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("out.png");

        let result = RustBackend::new().encode(&gradient(8, 8), &path);
        assert!(matches!(result, Err(BackendError::Io(_))));
    }
}
