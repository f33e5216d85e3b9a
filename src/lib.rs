// Module declarations in dependency order
pub mod core;
pub mod processing;
pub mod utils;

// Public exports for the embedding shell
pub use crate::core::{
    ColorFilter, PixelationJob, PixelationSettings, Progress, ProgressType, ProgressUpdate,
    DEFAULT_OUTPUT_DIR, DEFAULT_RESOLUTIONS,
};
pub use crate::processing::{
    BatchRunner, CancelToken, apply_filter, parse_resolution, pixelate_image, pixelate_images,
    pixelate_to_resolution,
};
pub use crate::utils::{OutputFormat, PixelError, PixelResult, ValidationError};
