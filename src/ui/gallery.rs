// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Gallery section: a grid of artwork tiles.
//!
//! Clicking a tile opens the lightbox on that artwork.

use super::images::{self, ImageCache};
use super::theme;
use crate::models::content::Artwork;

/// Result of gallery interaction.
pub enum GalleryAction {
    None,
    Open(usize),
}

pub fn show(
    ui: &mut egui::Ui,
    artworks: &[Artwork],
    cache: &mut ImageCache,
    is_mobile: bool,
) -> GalleryAction {
    let mut action = GalleryAction::None;
    theme::section_heading(ui, "Visual", "Gallery");

    let columns = if is_mobile { 2 } else { 3 };
    let spacing = 12.0;
    let tile = (ui.available_width() - spacing * (columns - 1) as f32) / columns as f32;

    for (row, chunk) in artworks.chunks(columns).enumerate() {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            for (col, artwork) in chunk.iter().enumerate() {
                let index = row * columns + col;
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(tile, tile), egui::Sense::click());

                let image = cache.get(&artwork.image, ui.ctx());
                let painter = ui.painter_at(rect);
                images::paint_cover(&painter, rect, image, &artwork.title, egui::Color32::WHITE);

                if response.hovered() {
                    painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(140));
                    painter.text(
                        rect.left_bottom() + egui::vec2(16.0, -36.0),
                        egui::Align2::LEFT_BOTTOM,
                        &artwork.title,
                        egui::FontId::proportional(18.0),
                        egui::Color32::WHITE,
                    );
                    if let Some(year) = &artwork.year {
                        painter.text(
                            rect.left_bottom() + egui::vec2(16.0, -16.0),
                            egui::Align2::LEFT_BOTTOM,
                            year,
                            egui::FontId::proportional(12.0),
                            egui::Color32::from_gray(200),
                        );
                    }
                }

                if response
                    .on_hover_cursor(egui::CursorIcon::ZoomIn)
                    .clicked()
                {
                    action = GalleryAction::Open(index);
                }
            }
        });
        ui.add_space(spacing);
    }

    action
}
