//! Color filters applied to the source image before resampling.
//!
//! Each filter maps the decoded image to a new derived image; the source
//! buffer is consumed, never mutated in place. Filters run exactly once per
//! job, on the full-size image, so every resolution of a job shares the
//! same filtered base.

use image::{DynamicImage, Rgb, RgbImage};
use crate::core::ColorFilter;

/// Dark end of the sepia ramp (#704214); the light end is white.
const SEPIA_DARK: [u8; 3] = [0x70, 0x42, 0x14];

/// Applies `filter` to `image`, returning the filtered base image.
///
/// `Grayscale` and `Sepia` go through a luminance pass and come back as
/// 3-channel RGB; alpha is dropped there, matching the reference behavior.
pub fn apply_filter(image: DynamicImage, filter: ColorFilter) -> DynamicImage {
    match filter {
        ColorFilter::None => image,
        ColorFilter::Grayscale => grayscale(&image),
        ColorFilter::Sepia => sepia(&image),
    }
}

fn grayscale(image: &DynamicImage) -> DynamicImage {
    let luma = image.to_luma8();
    let mut rgb = RgbImage::new(luma.width(), luma.height());
    for (x, y, pixel) in luma.enumerate_pixels() {
        let l = pixel[0];
        rgb.put_pixel(x, y, Rgb([l, l, l]));
    }
    DynamicImage::ImageRgb8(rgb)
}

fn sepia(image: &DynamicImage) -> DynamicImage {
    let luma = image.to_luma8();
    let mut rgb = RgbImage::new(luma.width(), luma.height());
    for (x, y, pixel) in luma.enumerate_pixels() {
        let l = pixel[0];
        rgb.put_pixel(x, y, Rgb([
            ramp(l, SEPIA_DARK[0]),
            ramp(l, SEPIA_DARK[1]),
            ramp(l, SEPIA_DARK[2]),
        ]));
    }
    DynamicImage::ImageRgb8(rgb)
}

/// Linear interpolation from `dark` (luminance 0) to 255 (luminance 255).
fn ramp(l: u8, dark: u8) -> u8 {
    let dark = dark as f32;
    (dark + (255.0 - dark) * (l as f32) / 255.0).round() as u8
}
