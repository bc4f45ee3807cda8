//! Parameter types describing a conversion.
//!
//! These structs describe *what* to do, not *how* to do it. A
//! [`ConversionRequest`] fully determines one conversion's behavior —
//! there is no process-wide default consulted mid-pipeline.
//!
//! ## Types
//!
//! - [`ResizeMethod`] — the closed set of transforms: crop, fit, stretch.
//! - [`Quality`] — lossy encoding quality (1–100, default 95). Clamped on construction.
//! - [`ConversionRequest`] — input path, output path, method, quality. Immutable.

use super::ConvertError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How a source image is brought to 16:9.
///
/// A closed set: adding a method is a compile-time-checked change, since
/// every consumer matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMethod {
    /// Cut a centered 16:9 region out of the source. No resampling —
    /// the highest-quality method.
    Crop,
    /// Letterbox/pillarbox the full source onto a black 16:9 canvas.
    Fit,
    /// Resample the source non-uniformly to 16:9; content distorts.
    Stretch,
}

impl ResizeMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ResizeMethod::Crop => "crop",
            ResizeMethod::Fit => "fit",
            ResizeMethod::Stretch => "stretch",
        }
    }
}

impl fmt::Display for ResizeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeMethod {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("crop") {
            Ok(ResizeMethod::Crop)
        } else if s.eq_ignore_ascii_case("fit") {
            Ok(ResizeMethod::Fit)
        } else if s.eq_ignore_ascii_case("stretch") {
            Ok(ResizeMethod::Stretch)
        } else {
            Err(ConvertError::UnsupportedMode(s.to_string()))
        }
    }
}

/// Quality setting for lossy image encoding (1-100).
///
/// Ignored, without error, by lossless output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(95)
    }
}

/// Everything that determines one conversion. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub method: ResizeMethod,
    pub quality: Quality,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!("crop".parse::<ResizeMethod>().unwrap(), ResizeMethod::Crop);
        assert_eq!("FIT".parse::<ResizeMethod>().unwrap(), ResizeMethod::Fit);
        assert_eq!("Stretch".parse::<ResizeMethod>().unwrap(), ResizeMethod::Stretch);
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = "smart".parse::<ResizeMethod>().unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedMode(ref m) if m == "smart"));
    }

    #[test]
    fn method_round_trips_through_display() {
        for method in [ResizeMethod::Crop, ResizeMethod::Fit, ResizeMethod::Stretch] {
            assert_eq!(method.to_string().parse::<ResizeMethod>().unwrap(), method);
        }
    }

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(200).value(), 100);
    }

    #[test]
    fn quality_default_is_95() {
        assert_eq!(Quality::default().value(), 95);
    }
}
