//! The pixelation transform.
//!
//! One call processes one source image: decode, normalize to RGBA, apply the
//! color filter once, then for every requested resolution downsample to a
//! square `res × res` working image and upsample back to the source
//! dimensions, both with nearest-neighbor resampling. The square intermediate
//! deliberately discards aspect ratio; the round trip restores it, which is
//! what produces the blocky look.
//!
//! Runs on the blocking thread pool; see [`super::batch`] for dispatch.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::gif::GifEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, Frame, ImageFormat};
use tracing::debug;

use crate::core::{PixelationJob, PixelationSettings};
use crate::utils::{
    OutputFormat, PixelError, PixelResult, ValidationError,
    ensure_output_dir, output_file_name, source_stem,
};
use super::filters::apply_filter;

/// Processes one job: every resolution of one source image.
///
/// Returns the written output paths in resolution order. Any failure aborts
/// the whole job and the image contributes nothing; outputs already written
/// before the failure are left on disk but not reported.
pub fn pixelate_image(job: &PixelationJob) -> PixelResult<Vec<PathBuf>> {
    let input_path = &job.input_path;
    let settings = &job.settings;

    let source = image::open(input_path).map_err(|e| {
        PixelError::decode(format!("Failed to open '{}': {}", input_path.display(), e))
    })?;

    // Normalize to RGBA before filtering so all decode formats behave alike
    let source = DynamicImage::ImageRgba8(source.to_rgba8());
    let base = apply_filter(source, settings.filter);

    debug!(
        "Loaded '{}': {}x{}, {} resolution(s)",
        input_path.display(),
        base.width(),
        base.height(),
        settings.resolutions.len()
    );

    ensure_output_dir(&settings.output_dir)?;

    let stem = source_stem(input_path);
    let mut outputs = Vec::with_capacity(settings.resolutions.len());
    for &res in &settings.resolutions {
        outputs.push(pixelate_to_resolution(&base, res, &stem, settings)?);
    }

    Ok(outputs)
}

/// Produces the single output for one resolution of an already-filtered base
/// image.
///
/// Exposed as the finer-grained extension point: callers wanting
/// per-resolution error handling can drive this directly instead of
/// [`pixelate_image`]'s all-or-nothing loop.
pub fn pixelate_to_resolution(
    base: &DynamicImage,
    res: u32,
    stem: &str,
    settings: &PixelationSettings,
) -> PixelResult<PathBuf> {
    if res == 0 {
        return Err(ValidationError::settings("Resolution must be positive").into());
    }

    let (width, height) = (base.width(), base.height());

    // Square working image, then back to the original canvas. resize_exact
    // ignores aspect ratio, which is required here.
    let small = base.resize_exact(res, res, FilterType::Nearest);
    let pixelated = small.resize_exact(width, height, FilterType::Nearest);

    let file_name = output_file_name(stem, res, settings.filter, settings.format);
    let output_path = settings.output_dir.join(file_name);

    encode_to(&pixelated, &output_path, settings.format)?;
    debug!("Wrote '{}'", output_path.display());

    Ok(output_path)
}

/// Encodes `image` to `path`, overwriting any existing file.
fn encode_to(image: &DynamicImage, path: &Path, format: OutputFormat) -> PixelResult<()> {
    let encode_err =
        |e: &dyn std::fmt::Display| PixelError::encode(format!("'{}': {}", path.display(), e));

    match format {
        OutputFormat::Png => image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| encode_err(&e)),
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel; flatten to RGB before encoding
            DynamicImage::ImageRgb8(image.to_rgb8())
                .save_with_format(path, ImageFormat::Jpeg)
                .map_err(|e| encode_err(&e))
        }
        OutputFormat::Gif => {
            let file = File::create(path).map_err(|e| encode_err(&e))?;
            let mut encoder = GifEncoder::new(BufWriter::new(file));
            // Frame encoding quantizes to an adaptive palette; GIF cannot
            // carry truecolor RGBA
            encoder
                .encode_frame(Frame::new(image.to_rgba8()))
                .map_err(|e| encode_err(&e))
        }
    }
}
