//! Input validation helpers for the shell boundary.
//!
//! Job-level checks live on [`crate::core::PixelationJob::validate`]; this
//! module covers free-form user input that must be rejected before a job is
//! ever constructed.

use crate::utils::{PixelResult, ValidationError};

/// Parses the shell's custom-resolution text field.
///
/// Rejects non-numeric and non-positive input so invalid text never reaches
/// a job.
pub fn parse_resolution(input: &str) -> PixelResult<u32> {
    let trimmed = input.trim();

    let res: u32 = trimmed.parse().map_err(|_| {
        ValidationError::settings(format!("Invalid resolution: '{}'", trimmed))
    })?;

    if res == 0 {
        return Err(ValidationError::settings("Resolution must be positive").into());
    }

    Ok(res)
}
