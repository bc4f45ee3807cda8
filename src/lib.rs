//! # Widescreen
//!
//! A high-quality converter of raster images to a 16:9 aspect ratio.
//! Three deterministic methods are supported: center-crop (cut the excess),
//! fit (letterbox/pillarbox onto a black canvas), and stretch (non-uniform
//! resample). Works on a single file or recursively over a directory tree.
//!
//! # Architecture
//!
//! The pipeline for every file is the same three steps:
//!
//! ```text
//! decode  →  transform (crop | fit | stretch)  →  encode
//! ```
//!
//! The geometry behind each transform is pure arithmetic on the source
//! width and height, kept free of I/O so it can be tested exhaustively
//! without touching an image. Batch mode wraps the same pipeline in a
//! directory walk that mirrors the input tree under the output root.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Geometry calculations, the three transforms, decode/encode |
//! | [`batch`] | Recursive discovery and per-file conversion of a directory tree |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## Extension-Driven Formats
//!
//! Input and output formats are chosen by file extension (JPEG, PNG, BMP,
//! TIFF, WebP), never by sniffing content. A mismatched extension is an
//! error, not a guess.
//!
//! ## Quality Over Size
//!
//! Encode settings favor fidelity and speed over output size: JPEG is
//! written without chroma subsampling (full 4:4:4), PNG at the fastest
//! compression level, WebP losslessly. Crop is the highest-quality method
//! because it copies pixels without resampling; fit and stretch resample
//! with Lanczos3.
//!
//! ## Sequential By Design
//!
//! Files are processed one at a time, to completion, with no shared state
//! between iterations. At most two decoded buffers are alive per file.
//! Abrupt termination can leave a partially written output file — an
//! accepted limitation.
//!
//! ## Black Padding
//!
//! Fit always pads with opaque black, even over a source with an alpha
//! channel. Alpha inside the pasted region survives when the output format
//! supports it; the bars themselves are never transparent.

pub mod batch;
pub mod imaging;
pub mod output;
