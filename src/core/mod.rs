//! Core types for pixelation jobs and progress.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`PixelationSettings`]: Shared batch parameters (resolutions, filter, format)
//! - [`PixelationJob`]: One source image plus its settings
//! - [`ColorFilter`]: Pixel-mapping applied before resampling
//! - [`Progress`]: Progress tracking for batch operations

mod types;
mod task;
mod progress;

pub use types::{PixelationSettings, ColorFilter, DEFAULT_RESOLUTIONS, DEFAULT_OUTPUT_DIR};
pub use task::PixelationJob;
pub use progress::{Progress, ProgressType, ProgressUpdate};
