//! Pixelation job definition and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::core::PixelationSettings;
use crate::utils::{PixelResult, ValidationError, is_supported_input};

/// One unit of work: a single source image plus the batch settings.
///
/// Produces one output file per resolution in the settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelationJob {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Shared batch settings (output dir, resolutions, filter, format)
    pub settings: PixelationSettings,
}

impl PixelationJob {
    pub fn new(input_path: impl Into<PathBuf>, settings: PixelationSettings) -> Self {
        Self {
            input_path: input_path.into(),
            settings,
        }
    }

    /// Re-checks the shell-side contract before the job enters a batch.
    pub async fn validate(&self) -> PixelResult<()> {
        self.validate_input_path().await?;
        self.validate_settings()?;
        Ok(())
    }

    async fn validate_input_path(&self) -> PixelResult<()> {
        let path: &Path = &self.input_path;

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|_| ValidationError::path_not_found(path))?;

        if !metadata.is_file() {
            return Err(ValidationError::not_a_file(path).into());
        }

        if !is_supported_input(path) {
            return Err(ValidationError::settings(format!(
                "Unsupported input format: {}", path.display()
            )).into());
        }

        Ok(())
    }

    fn validate_settings(&self) -> PixelResult<()> {
        if self.settings.resolutions.is_empty() {
            return Err(ValidationError::settings(
                "At least one resolution must be selected"
            ).into());
        }

        if let Some(res) = self.settings.resolutions.iter().find(|&&r| r == 0) {
            return Err(ValidationError::settings(format!(
                "Resolution must be positive, got {}", res
            )).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::PixelError;

    fn job_with(resolutions: Vec<u32>) -> PixelationJob {
        PixelationJob::new(
            "missing.png",
            PixelationSettings {
                resolutions,
                ..Default::default()
            },
        )
    }

    #[test]
    fn empty_resolutions_rejected() {
        let err = job_with(vec![]).validate_settings().unwrap_err();
        assert!(matches!(err, PixelError::Validation(_)));
    }

    #[test]
    fn zero_resolution_rejected() {
        let err = job_with(vec![32, 0]).validate_settings().unwrap_err();
        assert!(matches!(err, PixelError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_input_rejected() {
        let err = job_with(vec![32]).validate().await.unwrap_err();
        assert!(matches!(err, PixelError::Validation(_)));
    }
}
