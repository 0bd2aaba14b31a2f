// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Texture cache for artwork and tour backgrounds.
//!
//! Images are decoded on background threads and uploaded as textures once
//! they arrive. An image that cannot be loaded is remembered as failed and
//! drawn as a placeholder tile instead.

use crate::io::media::{self, LoadedImage};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

enum ImageSlot {
    Loading,
    Ready {
        texture: egui::TextureHandle,
        size: (u32, u32),
    },
    Failed,
}

type LoadResult = (String, Result<LoadedImage, String>);

pub struct ImageCache {
    base_dir: Option<PathBuf>,
    slots: HashMap<String, ImageSlot>,
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl ImageCache {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        let (sender, receiver) = channel();
        Self {
            base_dir,
            slots: HashMap::new(),
            sender,
            receiver,
        }
    }

    /// Forget all images, e.g. after loading a different content file.
    pub fn reset(&mut self, base_dir: Option<PathBuf>) {
        // Results still in flight for the old content are dropped with the channel.
        *self = Self::new(base_dir);
    }

    /// Upload finished loads. Returns true if anything changed.
    pub fn poll(&mut self, ctx: &egui::Context) -> bool {
        let mut changed = false;
        while let Ok((reference, result)) = self.receiver.try_recv() {
            let slot = match result {
                Ok(loaded) => {
                    let size = [loaded.width as usize, loaded.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                    let texture = ctx.load_texture(&reference, color_image, egui::TextureOptions::LINEAR);
                    log::info!("Loaded image {} ({}x{})", reference, loaded.width, loaded.height);
                    ImageSlot::Ready {
                        texture,
                        size: (loaded.width, loaded.height),
                    }
                }
                Err(e) => {
                    log::warn!("Using placeholder for {}: {}", reference, e);
                    ImageSlot::Failed
                }
            };
            self.slots.insert(reference, slot);
            changed = true;
        }
        changed
    }

    /// Texture and pixel size for `reference`, starting a load on first use.
    pub fn get(&mut self, reference: &str, ctx: &egui::Context) -> Option<(egui::TextureId, (u32, u32))> {
        if reference.is_empty() {
            return None;
        }
        match self.slots.get(reference) {
            Some(ImageSlot::Ready { texture, size }) => Some((texture.id(), *size)),
            Some(ImageSlot::Loading) | Some(ImageSlot::Failed) => None,
            None => {
                self.start_load(reference, ctx);
                None
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.slots.values().any(|slot| matches!(slot, ImageSlot::Loading))
    }

    fn start_load(&mut self, reference: &str, ctx: &egui::Context) {
        self.slots.insert(reference.to_string(), ImageSlot::Loading);

        let path = media::resolve(self.base_dir.as_deref(), reference);
        let reference = reference.to_string();
        let sender = self.sender.clone();
        let ctx = ctx.clone();

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = media::load_image(&path).map_err(|e| format!("{:#}", e));
            let _ = sender.send((reference, result));
            ctx.request_repaint();
        });
    }
}

/// Draw an image cropped to fill `rect`, or a placeholder when unavailable.
pub fn paint_cover(
    painter: &egui::Painter,
    rect: egui::Rect,
    image: Option<(egui::TextureId, (u32, u32))>,
    label: &str,
    tint: egui::Color32,
) {
    match image {
        Some((texture, size)) => {
            let uv = crate::util::geometry::cover_uv(size, rect);
            painter.image(texture, rect, uv, tint);
        }
        None => paint_placeholder(painter, rect, label),
    }
}

/// Flat tile shown while an image loads or when it failed to load.
pub fn paint_placeholder(painter: &egui::Painter, rect: egui::Rect, label: &str) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(38));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_gray(140),
    );
}

/// Directory a content file's relative image paths are resolved against.
pub fn base_dir_of(content_path: &Path) -> Option<PathBuf> {
    content_path.parent().map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_for_loads(cache: &mut ImageCache, ctx: &egui::Context) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while cache.is_loading() && Instant::now() < deadline {
            cache.poll(ctx);
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_missing_image_falls_back_to_placeholder() {
        let ctx = egui::Context::default();
        let dir = tempfile::tempdir().unwrap();
        let mut cache = ImageCache::new(Some(dir.path().to_path_buf()));

        assert!(cache.get("gallery/missing.jpg", &ctx).is_none());
        assert!(cache.is_loading());
        wait_for_loads(&mut cache, &ctx);

        assert!(!cache.is_loading());
        assert!(cache.get("gallery/missing.jpg", &ctx).is_none());
        assert!(!cache.is_loading());
    }

    #[test]
    fn test_image_becomes_texture() {
        let ctx = egui::Context::default();
        let dir = tempfile::tempdir().unwrap();
        image::RgbaImage::from_pixel(4, 2, image::Rgba([255, 255, 255, 255]))
            .save(dir.path().join("cover.png"))
            .unwrap();
        let mut cache = ImageCache::new(Some(dir.path().to_path_buf()));

        cache.get("cover.png", &ctx);
        wait_for_loads(&mut cache, &ctx);

        let (_, size) = cache.get("cover.png", &ctx).unwrap();
        assert_eq!(size, (4, 2));
    }

    #[test]
    fn test_empty_reference_is_ignored() {
        let ctx = egui::Context::default();
        let mut cache = ImageCache::new(None);
        assert!(cache.get("", &ctx).is_none());
        assert!(!cache.is_loading());
    }
}
