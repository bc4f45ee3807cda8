//! Pure calculation functions for 16:9 geometry.
//!
//! All functions here are pure and testable without any I/O or images.
//! Each resize method has one entry point: [`crop_box`] computes the
//! centered region to cut out, [`fit_canvas`] the letterbox/pillarbox
//! canvas to paste onto, and [`stretch_target`] the non-uniform resize
//! target. All three guarantee the resulting width:height deviates from
//! 16:9 by less than one pixel in either dimension.

use std::cmp::Ordering;
use std::fmt;

/// Target aspect ratio, width over height.
const TARGET_W: u64 = 16;
const TARGET_H: u64 = 9;

/// Width and height of a raster image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height.
    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A centered crop region within an image.
///
/// `right` and `bottom` are exclusive, so `right - left` and
/// `bottom - top` are the cropped dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(self) -> u32 {
        self.right - self.left
    }

    pub fn height(self) -> u32 {
        self.bottom - self.top
    }

    /// The full-image box — used when the source is already 16:9.
    fn full(dims: Dimensions) -> Self {
        Self {
            left: 0,
            top: 0,
            right: dims.width,
            bottom: dims.height,
        }
    }
}

/// Compare an image's aspect against 16:9 without floating point.
///
/// Cross-multiplied (`w * 9` vs `h * 16`) so the comparison is exact:
/// `Greater` means wider than 16:9, `Less` means taller.
fn compare_to_target(dims: Dimensions) -> Ordering {
    (u64::from(dims.width) * TARGET_H).cmp(&(u64::from(dims.height) * TARGET_W))
}

/// Scale `value` by `num/den`, rounding half away from zero.
fn scale_rounded(value: u32, num: u64, den: u64) -> u32 {
    (f64::from(value) * num as f64 / den as f64).round() as u32
}

/// Compute the centered 16:9 crop region for a source image.
///
/// A source wider than 16:9 keeps its height and trims `w - round(h*16/9)`
/// pixels from the sides; a taller source keeps its width and trims the
/// top and bottom. When the excess is odd the extra pixel comes off the
/// right (or bottom) edge, so the two trims always sum exactly to the
/// excess. A source already at 16:9 yields the full-image box.
pub fn crop_box(dims: Dimensions) -> CropBox {
    match compare_to_target(dims) {
        Ordering::Greater => {
            let new_width = scale_rounded(dims.height, TARGET_W, TARGET_H);
            let left = (dims.width - new_width) / 2;
            CropBox {
                left,
                top: 0,
                right: left + new_width,
                bottom: dims.height,
            }
        }
        Ordering::Less => {
            let new_height = scale_rounded(dims.width, TARGET_H, TARGET_W);
            let top = (dims.height - new_height) / 2;
            CropBox {
                left: 0,
                top,
                right: dims.width,
                bottom: top + new_height,
            }
        }
        Ordering::Equal => CropBox::full(dims),
    }
}

/// Compute the 16:9 canvas that contains the source with no cropping.
///
/// A source wider than 16:9 keeps its width and gains letterbox bars
/// (`round(w*9/16)` canvas height); a taller source keeps its height and
/// gains pillarbox bars. The canvas always contains the source, so fit
/// never needs to downscale in practice.
pub fn fit_canvas(dims: Dimensions) -> Dimensions {
    match compare_to_target(dims) {
        Ordering::Greater => {
            Dimensions::new(dims.width, scale_rounded(dims.width, TARGET_H, TARGET_W))
        }
        Ordering::Less => {
            Dimensions::new(scale_rounded(dims.height, TARGET_W, TARGET_H), dims.height)
        }
        Ordering::Equal => dims,
    }
}

/// Compute the stretch target: source width paired with `round(w*9/16)`.
///
/// Stretch always keys off the source width, whichever dimension is
/// larger. A portrait source therefore gets its height squeezed hard
/// rather than its width grown.
pub fn stretch_target(dims: Dimensions) -> Dimensions {
    Dimensions::new(dims.width, scale_rounded(dims.width, TARGET_H, TARGET_W))
}
