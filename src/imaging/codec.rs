//! Extension-to-format mapping, decode, and the quality-preserving encoders.
//!
//! Formats are chosen by file extension, never by sniffing content.
//! Encode settings favor speed and fidelity over output size:
//!
//! | Format | Encoder | Settings |
//! |---|---|---|
//! | JPEG | `JpegEncoder::new_with_quality` | requested quality, no chroma subsampling |
//! | PNG | `PngEncoder::new_with_quality` | fastest compression, adaptive filtering |
//! | BMP | `BmpEncoder` | — |
//! | TIFF | `TiffEncoder` | — |
//! | WebP | `WebPEncoder::new_lossless` | lossless; quality ignored |

use super::ConvertError;
use super::params::Quality;
use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{self, PngEncoder};
use image::codecs::tiff::TiffEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageError, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Extensions whose decoders and encoders are compiled in.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "webp"];

/// The closed set of output codecs, keyed by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Jpeg,
    Png,
    Bmp,
    Tiff,
    WebP,
}

fn format_for(path: &Path) -> Option<OutputFormat> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
        Some(OutputFormat::Jpeg)
    } else if ext.eq_ignore_ascii_case("png") {
        Some(OutputFormat::Png)
    } else if ext.eq_ignore_ascii_case("bmp") {
        Some(OutputFormat::Bmp)
    } else if ext.eq_ignore_ascii_case("tiff") {
        Some(OutputFormat::Tiff)
    } else if ext.eq_ignore_ascii_case("webp") {
        Some(OutputFormat::WebP)
    } else {
        None
    }
}

/// Whether the path's extension maps to a supported codec.
pub fn is_supported(path: &Path) -> bool {
    format_for(path).is_some()
}

/// Load and decode an image from disk. The extension picks the decoder.
pub fn load_image(path: &Path) -> Result<DynamicImage, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::InputNotFound(path.to_path_buf()));
    }
    if !is_supported(path) {
        return Err(ConvertError::UnsupportedFormat(path.display().to_string()));
    }
    ImageReader::open(path)?.decode().map_err(|e| {
        ConvertError::InvalidDimensions(format!("failed to decode {}: {}", path.display(), e))
    })
}

fn encode_error(path: &Path, source: ImageError) -> ConvertError {
    ConvertError::Encode {
        path: path.to_path_buf(),
        source,
    }
}

/// Write the buffer in the layout the encoder expects: RGBA8 when it
/// carries alpha, RGB8 otherwise.
fn write_pixels<E: ImageEncoder>(
    image: &DynamicImage,
    encoder: E,
    path: &Path,
) -> Result<(), ConvertError> {
    let result = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        encoder.write_image(
            rgba.as_raw(),
            rgba.width(),
            rgba.height(),
            ExtendedColorType::Rgba8,
        )
    } else {
        let rgb = image.to_rgb8();
        encoder.write_image(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )
    };
    result.map_err(|e| encode_error(path, e))
}

/// Serialize `image` to `path`, honoring `quality` for lossy formats.
///
/// Creates or overwrites the file. The parent directory must already
/// exist — batch mode creates mirrored directories before calling this.
pub fn save_image(image: &DynamicImage, path: &Path, quality: Quality) -> Result<(), ConvertError> {
    let format = format_for(path)
        .ok_or_else(|| ConvertError::UnsupportedFormat(path.display().to_string()))?;
    let file = File::create(path).map_err(|e| encode_error(path, ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Jpeg => {
            // JPEG carries no alpha; flatten to RGB8. The encoder writes all
            // components at 1x1 sampling — full 4:4:4, no chroma subsampling.
            let rgb = image.to_rgb8();
            JpegEncoder::new_with_quality(&mut writer, quality.value())
                .write_image(
                    rgb.as_raw(),
                    rgb.width(),
                    rgb.height(),
                    ExtendedColorType::Rgb8,
                )
                .map_err(|e| encode_error(path, e))
        }
        OutputFormat::Png => {
            // Lowest compression effort: fastest encode, larger files.
            let encoder = PngEncoder::new_with_quality(
                &mut writer,
                png::CompressionType::Fast,
                png::FilterType::Adaptive,
            );
            write_pixels(image, encoder, path)
        }
        OutputFormat::Bmp => write_pixels(image, BmpEncoder::new(&mut writer), path),
        OutputFormat::Tiff => write_pixels(image, TiffEncoder::new(&mut writer), path),
        OutputFormat::WebP => {
            // The pure-Rust WebP encoder is lossless only; quality is ignored.
            write_pixels(image, WebPEncoder::new_lossless(&mut writer), path)
        }
    }?;

    // Surface flush failures (disk full) instead of losing them on drop.
    writer
        .flush()
        .map_err(|e| encode_error(path, ImageError::IoError(e)))
}

/// Default output path for a single-file conversion: `photo.jpg` →
/// `photo_16_9.jpg`, next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "converted".to_string());
    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_16_9.{ext}"),
        None => format!("{stem}_16_9"),
    };
    input.with_file_name(name)
}
