//! CLI command implementations

pub mod blur;
pub mod grayscale;
pub mod info;

use anyhow::{Context, Result};
use iris_core::{ImageBuffer, Raster};
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<ImageBuffer> {
    iris_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image<R: Raster + ?Sized>(path: &Path, image: &R) -> Result<()> {
    iris_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Short description such as `640x480 RGBA`.
pub fn describe<R: Raster + ?Sized>(image: &R) -> String {
    let model = if image.layout().has_alpha() { "RGBA" } else { "RGB" };
    format!("{}x{} {}", image.width(), image.height(), model)
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
