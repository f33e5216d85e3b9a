use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use crate::utils::{PixelError, ValidationError};

/// Extensions the decoder accepts as batch input.
pub const SUPPORTED_INPUT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Encoding format for pixelated outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Jpeg,
    Gif,
}

impl OutputFormat {
    /// File extension used in the output naming contract.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
        }
    }

    /// Whether the container carries an alpha channel.
    ///
    /// JPEG has no alpha and GIF outputs are palette-quantized, so both
    /// need channel conversion before encoding.
    pub fn supports_alpha(&self) -> bool {
        matches!(self, Self::Png)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = PixelError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "gif" => Ok(Self::Gif),
            _ => Err(ValidationError::settings(format!(
                "Unsupported output format: {}", name
            )).into()),
        }
    }
}

/// Check whether a source path carries a supported input extension.
pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_INPUT_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
