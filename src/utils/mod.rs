pub mod error;
pub mod formats;
pub mod fs;

pub use error::{PixelError, PixelResult, ValidationError, PathError};
pub use formats::{OutputFormat, is_supported_input, SUPPORTED_INPUT_EXTENSIONS};
pub use fs::{source_stem, output_file_name, ensure_output_dir};
