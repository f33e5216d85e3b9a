mod batch;
mod filters;
mod pixelate;
mod validation;

pub use batch::{BatchRunner, CancelToken, pixelate_images};
pub use filters::apply_filter;
pub use pixelate::{pixelate_image, pixelate_to_resolution};
pub use validation::parse_resolution;
