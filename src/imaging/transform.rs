//! The three resize methods, applied to decoded buffers.
//!
//! Crop copies pixels without resampling, fit pastes the source onto an
//! opaque black canvas, and stretch resamples non-uniformly with Lanczos3.
//! The input buffer is never mutated — every operation returns a new one.

use super::ConvertError;
use super::calculations::{self, CropBox, Dimensions};
use super::params::ResizeMethod;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

/// Read the source dimensions, rejecting empty images.
pub fn source_dimensions(image: &DynamicImage) -> Result<Dimensions, ConvertError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidDimensions(format!(
            "source dimensions {width}x{height}"
        )));
    }
    Ok(Dimensions::new(width, height))
}

/// Apply the requested resize method, producing a new 16:9 buffer.
pub fn apply(image: &DynamicImage, method: ResizeMethod) -> Result<DynamicImage, ConvertError> {
    let dims = source_dimensions(image)?;
    Ok(match method {
        ResizeMethod::Crop => apply_crop(image, calculations::crop_box(dims)),
        ResizeMethod::Fit => apply_fit(image, calculations::fit_canvas(dims)),
        ResizeMethod::Stretch => apply_stretch(image, calculations::stretch_target(dims)),
    })
}

/// Cut out the pixels inside `cut` — a lossless copy, no resampling.
pub fn apply_crop(image: &DynamicImage, cut: CropBox) -> DynamicImage {
    image.crop_imm(cut.left, cut.top, cut.width(), cut.height())
}

/// Paste the source centered on an opaque black canvas of `canvas` size.
///
/// A source with an alpha channel keeps it inside the pasted region; the
/// padding is opaque black either way, even over a transparent source.
/// The canvas always contains the source (see [`super::fit_canvas`]);
/// the downscale branch only runs if rounding ever produces a canvas
/// smaller than the source.
pub fn apply_fit(image: &DynamicImage, canvas: Dimensions) -> DynamicImage {
    let scaled;
    let source = if image.width() > canvas.width || image.height() > canvas.height {
        scaled = image.resize(canvas.width, canvas.height, FilterType::Lanczos3);
        &scaled
    } else {
        image
    };

    let left = i64::from((canvas.width - source.width()) / 2);
    let top = i64::from((canvas.height - source.height()) / 2);

    if source.color().has_alpha() {
        let mut out = RgbaImage::from_pixel(canvas.width, canvas.height, Rgba([0, 0, 0, 255]));
        // replace, not overlay: the pasted region keeps its own alpha
        imageops::replace(&mut out, &source.to_rgba8(), left, top);
        DynamicImage::ImageRgba8(out)
    } else {
        let mut out = RgbImage::from_pixel(canvas.width, canvas.height, Rgb([0, 0, 0]));
        imageops::replace(&mut out, &source.to_rgb8(), left, top);
        DynamicImage::ImageRgb8(out)
    }
}

/// Resample the whole source to `target` with Lanczos3. Content aspect
/// is not preserved — that is the point of stretch.
pub fn apply_stretch(image: &DynamicImage, target: Dimensions) -> DynamicImage {
    image.resize_exact(target.width, target.height, FilterType::Lanczos3)
}
