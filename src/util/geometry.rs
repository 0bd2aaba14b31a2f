// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides aspect-ratio fitting for artwork and background
//! images drawn inside arbitrary rectangles.

/// Largest rectangle with the image's aspect ratio that fits in `available`,
/// centered in it. Degenerate images fill the whole area.
pub fn fit_within(image_size: (u32, u32), available: egui::Rect) -> egui::Rect {
    let (img_width, img_height) = image_size;
    if img_width == 0 || img_height == 0 || available.height() <= 0.0 {
        return available;
    }

    let img_aspect = img_width as f32 / img_height as f32;
    let available_aspect = available.width() / available.height();

    let size = if img_aspect > available_aspect {
        // Image is wider - fit to width
        egui::vec2(available.width(), available.width() / img_aspect)
    } else {
        // Image is taller - fit to height
        egui::vec2(available.height() * img_aspect, available.height())
    };

    egui::Rect::from_center_size(available.center(), size)
}

/// Texture coordinates that crop the image so it covers `available`
/// without distortion. Gallery tiles and tour backgrounds are drawn this way.
pub fn cover_uv(image_size: (u32, u32), available: egui::Rect) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    let (img_width, img_height) = image_size;
    if img_width == 0 || img_height == 0 || available.height() <= 0.0 {
        return full;
    }

    let img_aspect = img_width as f32 / img_height as f32;
    let available_aspect = available.width() / available.height();

    if img_aspect > available_aspect {
        let visible = available_aspect / img_aspect;
        let margin = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(margin, 0.0), egui::pos2(1.0 - margin, 1.0))
    } else {
        let visible = img_aspect / available_aspect;
        let margin = (1.0 - visible) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, margin), egui::pos2(1.0, 1.0 - margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(w: f32, h: f32) -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(w, h))
    }

    #[test]
    fn test_fit_wide_image() {
        let fitted = fit_within((1920, 1080), rect(800.0, 800.0));
        assert!((fitted.width() - 800.0).abs() < 0.001);
        assert!((fitted.height() - 450.0).abs() < 0.001);
        assert!((fitted.min.y - 175.0).abs() < 0.001);
    }

    #[test]
    fn test_fit_tall_image() {
        let fitted = fit_within((600, 900), rect(900.0, 600.0));
        assert!((fitted.height() - 600.0).abs() < 0.001);
        assert!((fitted.width() - 400.0).abs() < 0.001);
        assert!((fitted.center().x - 450.0).abs() < 0.001);
    }

    #[test]
    fn test_fit_degenerate_image() {
        let area = rect(300.0, 200.0);
        assert_eq!(fit_within((0, 10), area), area);
    }

    #[test]
    fn test_cover_crops_long_side() {
        let uv = cover_uv((200, 100), rect(100.0, 100.0));
        assert!((uv.min.x - 0.25).abs() < 0.001);
        assert!((uv.max.x - 0.75).abs() < 0.001);
        assert_eq!(uv.min.y, 0.0);

        let uv = cover_uv((100, 100), rect(100.0, 100.0));
        assert_eq!(uv, egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)));
    }
}
