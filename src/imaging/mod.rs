//! Image conversion to 16:9 — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** (JPEG, PNG, BMP, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | **Crop** | `DynamicImage::crop_imm` (lossless pixel copy) |
//! | **Fit / Stretch resample** | `image::imageops` with `Lanczos3` |
//! | **Encode** | per-format `image::codecs` encoders |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for 16:9 dimension math (unit testable)
//! - **Parameters**: Data structures describing a conversion
//! - **Transform**: The three resize methods, applied to decoded buffers
//! - **Codec**: Extension-to-format mapping, decode, and encode
//! - **Operations**: The single-file pipeline combining all of the above

mod calculations;
pub mod codec;
pub mod operations;
mod params;
pub mod transform;

pub use calculations::{CropBox, Dimensions, crop_box, fit_canvas, stretch_target};
pub use codec::SUPPORTED_EXTENSIONS;
pub use operations::{ConversionReport, convert_file};
pub use params::{ConversionRequest, Quality, ResizeMethod};

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the conversion pipeline.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid image: {0}")]
    InvalidDimensions(String),
    #[error("unknown resize method: {0}")]
    UnsupportedMode(String),
    #[error("encode failed for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
