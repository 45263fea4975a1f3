use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgb, RgbImage};
use tracing::info;

use crate::error::{PipelineError, Result};

pub const PLACEHOLDER_WIDTH: u32 = 800;
pub const PLACEHOLDER_HEIGHT: u32 = 400;
pub const PLACEHOLDER_FILE: &str = "campus-placeholder.png";

/// Gradient used as the campus placeholder image
pub fn gradient() -> RgbImage {
    ImageBuffer::from_fn(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, |x, y| {
        Rgb([(y % 256) as u8, ((x + y) % 256) as u8, (x % 256) as u8])
    })
}

/// Write the placeholder into `images_dir` unless it already exists
pub fn ensure_placeholder(images_dir: &Path) -> Result<PathBuf> {
    let path = images_dir.join(PLACEHOLDER_FILE);
    if path.exists() {
        return Ok(path);
    }

    std::fs::create_dir_all(images_dir)?;
    gradient()
        .save(&path)
        .map_err(|e| PipelineError::generic(format!("Failed to write placeholder image: {}", e)))?;

    info!("Created placeholder image at {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_gradient_pixels() {
        let img = gradient();
        assert_eq!(img.dimensions(), (800, 400));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(300, 10), &Rgb([10, 54, 44]));
    }

    #[test]
    fn test_existing_placeholder_is_kept() {
        let dir = tempdir().unwrap();
        let path = ensure_placeholder(dir.path()).unwrap();
        assert!(image::open(&path).is_ok());

        std::fs::write(&path, b"custom").unwrap();
        ensure_placeholder(dir.path()).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"custom");
    }
}
