use std::path::{Path, PathBuf};

use crate::banner::compose_banner;
use crate::color::Theme;
use crate::error::{BrandError, BrandResult};
use crate::logo::compose_logo;
use crate::surface::Surface;

pub const HEADER_FILE: &str = "header.png";
pub const LOGO_FILE: &str = "logo.png";

/// Writes `surface` as an RGBA8 PNG, creating parent directories as
/// needed. This is the only propagating failure in the generator.
pub fn write_png(surface: &Surface, path: &Path) -> BrandResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    image::save_buffer_with_format(
        path,
        surface.data(),
        surface.width(),
        surface.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| match e {
        image::ImageError::IoError(io) => BrandError::Io(io),
        other => BrandError::encode(other.to_string()),
    })
}

/// Composes both branding assets and writes them under `out_dir`. The pair
/// is atomic in intent: the first write failure aborts the run.
pub fn generate(out_dir: &Path, theme: &Theme) -> BrandResult<[PathBuf; 2]> {
    let header_path = out_dir.join(HEADER_FILE);
    write_png(&compose_banner(theme), &header_path)?;
    tracing::debug!(path = %header_path.display(), "wrote banner");

    let logo_path = out_dir.join(LOGO_FILE);
    write_png(&compose_logo(theme), &logo_path)?;
    tracing::debug!(path = %logo_path.display(), "wrote logo");

    Ok([header_path, logo_path])
}
