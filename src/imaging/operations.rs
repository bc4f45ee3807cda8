//! The single-file conversion pipeline.
//!
//! Combines the codec and the transform executor: decode the input,
//! apply the requested resize method, encode the result. Batch mode
//! calls this once per discovered file.

use super::ConvertError;
use super::calculations::Dimensions;
use super::codec;
use super::params::{ConversionRequest, ResizeMethod};
use super::transform;
use std::path::PathBuf;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Outcome of one successful conversion.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub original: Dimensions,
    pub converted: Dimensions,
    pub method: ResizeMethod,
    pub output: PathBuf,
}

/// Convert a single image to 16:9 according to `request`.
///
/// Holds at most two decoded buffers at once: the source and the
/// transformed result. Neither outlives the call.
pub fn convert_file(request: &ConversionRequest) -> Result<ConversionReport> {
    let image = codec::load_image(&request.input)?;
    let original = transform::source_dimensions(&image)?;

    let transformed = transform::apply(&image, request.method)?;
    let converted = Dimensions::new(transformed.width(), transformed.height());
    drop(image);

    codec::save_image(&transformed, &request.output, request.quality)?;

    Ok(ConversionReport {
        original,
        converted,
        method: request.method,
        output: request.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Quality;
    use image::{Rgb, RgbImage};
    use std::path::Path;

    /// Create a small valid JPEG file with the given dimensions.
    fn create_test_jpeg(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        img.save(path).unwrap();
    }

    fn request(input: &Path, output: &Path, method: ResizeMethod) -> ConversionRequest {
        ConversionRequest {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            method,
            quality: Quality::default(),
        }
    }

    #[test]
    fn crop_end_to_end() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        create_test_jpeg(&source, 400, 300);

        let output = tmp.path().join("out.jpg");
        let report = convert_file(&request(&source, &output, ResizeMethod::Crop)).unwrap();

        assert_eq!(report.original, Dimensions::new(400, 300));
        assert_eq!(report.converted, Dimensions::new(400, 225));
        assert_eq!(report.method, ResizeMethod::Crop);

        let written = image::image_dimensions(&output).unwrap();
        assert_eq!(written, (400, 225));
    }

    #[test]
    fn fit_end_to_end_pillarboxes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        create_test_jpeg(&source, 300, 300);

        let output = tmp.path().join("out.png");
        let report = convert_file(&request(&source, &output, ResizeMethod::Fit)).unwrap();

        // 300x300 → canvas round(300*16/9) = 533 wide
        assert_eq!(report.converted, Dimensions::new(533, 300));
        assert_eq!(image::image_dimensions(&output).unwrap(), (533, 300));
    }

    #[test]
    fn stretch_end_to_end_across_formats() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        create_test_jpeg(&source, 200, 200);

        let output = tmp.path().join("out.webp");
        let report = convert_file(&request(&source, &output, ResizeMethod::Stretch)).unwrap();
        assert_eq!(report.converted, Dimensions::new(200, 113));
        assert_eq!(image::image_dimensions(&output).unwrap(), (200, 113));
    }

    #[test]
    fn missing_input_is_input_not_found() {
        let tmp = tempfile::TempDir::new().unwrap();
        let output = tmp.path().join("out.jpg");
        let err = convert_file(&request(
            Path::new("/nonexistent/image.jpg"),
            &output,
            ResizeMethod::Crop,
        ))
        .unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound(_)));
        assert!(!output.exists());
    }

    #[test]
    fn unsupported_output_leaves_no_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.jpg");
        create_test_jpeg(&source, 100, 100);

        let output = tmp.path().join("out.gif");
        let err =
            convert_file(&request(&source, &output, ResizeMethod::Crop)).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedFormat(_)));
        assert!(!output.exists());
    }
}
