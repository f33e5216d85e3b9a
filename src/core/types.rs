//! Core types for pixelation settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::utils::OutputFormat;

/// Resolutions pre-selected in the shell's checkbox panel, used when the
/// caller supplies none.
pub const DEFAULT_RESOLUTIONS: &[u32] = &[32, 64, 128, 256];

/// Default output directory relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "pixelated_images";

/// Color filter applied once to the source image before resampling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFilter {
    /// Identity: the source pixels pass through unchanged
    #[default]
    None,
    /// Luminance, re-expanded to equal R, G, B channels
    Grayscale,
    /// Luminance mapped onto the dark-brown-to-white sepia ramp
    Sepia,
}

impl ColorFilter {
    /// Filename suffix for the naming contract; `None` contributes no suffix.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Grayscale => Some("grayscale"),
            Self::Sepia => Some("sepia"),
        }
    }
}

/// Shared parameters for one batch of pixelation jobs.
///
/// Collected by the shell's option panels and applied to every source
/// image in the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelationSettings {
    /// Directory all outputs are written to; created if absent
    pub output_dir: PathBuf,
    /// Target resolutions, processed in order; each yields one output file
    pub resolutions: Vec<u32>,
    /// Color filter applied before resampling
    #[serde(default)]
    pub filter: ColorFilter,
    /// Encoding format for every output in the batch
    pub format: OutputFormat,
}

impl Default for PixelationSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            resolutions: DEFAULT_RESOLUTIONS.to_vec(),
            filter: ColorFilter::None,
            format: OutputFormat::Png,
        }
    }
}
