use serde::{Deserialize, Serialize};

/// Progress message type
#[derive(Debug, Deserialize, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProgressType {
    Start,
    Progress,
    Complete,
    Error,
}

/// Unified progress struct for tracking a batch throughout the crate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Progress type (start, progress, complete, error)
    pub progress_type: ProgressType,
    /// Number of completed source images (failed ones included)
    pub completed_images: usize,
    /// Total number of source images in the batch
    pub total_images: usize,
    /// Progress percentage (0-100), floor of completed/total
    pub progress_percentage: usize,
    /// Current status message
    pub status: String,
    /// Optional error message for failed images
    #[serde(default)]
    pub error: Option<String>,
    /// Optional additional metadata
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Simplified progress update for the shell's progress bar
#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub completed_images: usize,
    pub total_images: usize,
    pub progress_percentage: usize,
    pub status: String,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl Progress {
    /// Create a new Progress instance with basic information
    pub fn new(
        progress_type: ProgressType,
        completed_images: usize,
        total_images: usize,
        status: &str,
    ) -> Self {
        let progress_percentage = if total_images > 0 {
            (completed_images * 100) / total_images
        } else {
            0
        };

        Self {
            progress_type,
            completed_images,
            total_images,
            progress_percentage,
            status: status.to_string(),
            error: None,
            metadata: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Convert to a ProgressUpdate for shell consumption
    pub fn to_progress_update(&self) -> ProgressUpdate {
        ProgressUpdate {
            completed_images: self.completed_images,
            total_images: self.total_images,
            progress_percentage: self.progress_percentage,
            status: self.status.clone(),
            metadata: self.metadata.clone(),
        }
    }
}
