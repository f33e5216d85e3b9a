use std::path::Path;
use crate::core::ColorFilter;
use crate::utils::{OutputFormat, PixelError, PixelResult};

/// Source base name without extension, as used in output filenames.
pub fn source_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
        .to_string()
}

/// Build an output filename per the naming contract:
/// `{base}_pixelated_{res}x{res}[_{filter}].{ext}`.
///
/// The filter suffix appears only when a non-identity filter was applied.
/// Shells rely on these names being stable across versions.
pub fn output_file_name(stem: &str, res: u32, filter: ColorFilter, format: OutputFormat) -> String {
    let mut name = format!("{stem}_pixelated_{res}x{res}");
    if let Some(suffix) = filter.suffix() {
        name.push('_');
        name.push_str(suffix);
    }
    name.push('.');
    name.push_str(format.extension());
    name
}

/// Create the output directory (and parents) if absent.
///
/// Runs inside the blocking transform, so this uses synchronous IO.
pub fn ensure_output_dir(dir: &Path) -> PixelResult<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| PixelError::directory(format!(
            "Cannot create output directory {}: {}", dir.display(), e
        )))
}
