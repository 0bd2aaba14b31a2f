// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image loading.
//!
//! Decodes artwork and background images into RGBA pixels ready to be
//! uploaded as egui textures.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A decoded image.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load an image file and convert it to RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

/// Resolve an image reference from a content file.
///
/// Relative paths are taken relative to the directory holding the content
/// file, or the working directory for built-in content.
pub fn resolve(base: Option<&Path>, reference: &str) -> PathBuf {
    let path = Path::new(reference);
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([150, 0, 24, 255]))
            .save(&path)
            .unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (3, 2));
        assert_eq!(loaded.pixels.len(), 3 * 2 * 4);
        assert_eq!(&loaded.pixels[..4], &[150, 0, 24, 255]);
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let err = load_image(Path::new("does/not/exist.jpg")).err().unwrap();
        assert!(err.to_string().contains("does/not/exist.jpg"));
    }

    #[test]
    fn test_resolve_relative_to_content_dir() {
        let base = Path::new("/srv/site");
        assert_eq!(resolve(Some(base), "gallery/a.jpg"), PathBuf::from("/srv/site/gallery/a.jpg"));
        assert_eq!(resolve(Some(base), "/abs/a.jpg"), PathBuf::from("/abs/a.jpg"));
        assert_eq!(resolve(None, "gallery/a.jpg"), PathBuf::from("gallery/a.jpg"));
    }
}
