// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Full-screen artwork viewer.
//!
//! Drawn as a foreground area over the page while the lightbox navigator is
//! open: backdrop, the current artwork fitted to the window, previous/next
//! arrows, a caption with an "i / N" counter and a thumbnail strip.

use super::images::{self, ImageCache};
use crate::models::content::Artwork;
use crate::models::navigator::Navigator;
use crate::util::geometry::fit_within;

/// Result of lightbox interaction.
pub enum LightboxAction {
    None,
    Close,
    Previous,
    Next,
    GoTo(usize),
}

const THUMB: f32 = 64.0;

/// Display the lightbox. `opacity` is the image fade-in, `0.0..=1.0`.
pub fn show(
    ctx: &egui::Context,
    lightbox: &Navigator<Artwork>,
    cache: &mut ImageCache,
    opacity: f32,
    is_mobile: bool,
) -> LightboxAction {
    let (Some(artwork), Some(index)) = (lightbox.current(), lightbox.index()) else {
        return LightboxAction::None;
    };
    let artworks = lightbox.items();
    let count = artworks.len();
    let mut action = LightboxAction::None;

    egui::Area::new(egui::Id::new("lightbox"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let screen = ctx.screen_rect();

            // Backdrop: clicking anywhere outside the controls closes.
            let backdrop = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter().rect_filled(screen, 0.0, egui::Color32::from_black_alpha(242));
            if backdrop.clicked() {
                action = LightboxAction::Close;
            }

            let strip_height = if count > 1 && !is_mobile { THUMB + 32.0 } else { 0.0 };
            let image_area = egui::Rect::from_min_max(
                screen.min + egui::vec2(64.0, 64.0),
                screen.max - egui::vec2(64.0, 120.0 + strip_height),
            );

            let image = cache.get(&artwork.image, ctx);
            let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
            let image_rect = match image {
                Some((texture, size)) => {
                    let rect = fit_within(size, image_area);
                    ui.painter().image(
                        texture,
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::from_white_alpha(alpha),
                    );
                    rect
                }
                None => {
                    let rect = fit_within((4, 3), image_area);
                    images::paint_placeholder(ui.painter(), rect, &artwork.title);
                    rect
                }
            };
            // Clicks on the artwork itself do not close.
            ui.allocate_rect(image_rect, egui::Sense::click());

            // Caption
            let caption_top = image_area.bottom() + 24.0;
            let painter = ui.painter();
            painter.text(
                egui::pos2(screen.center().x, caption_top),
                egui::Align2::CENTER_TOP,
                &artwork.title,
                egui::FontId::proportional(22.0),
                egui::Color32::WHITE,
            );
            let mut line = caption_top + 32.0;
            if let Some(year) = &artwork.year {
                painter.text(
                    egui::pos2(screen.center().x, line),
                    egui::Align2::CENTER_TOP,
                    year,
                    egui::FontId::proportional(14.0),
                    egui::Color32::from_white_alpha(180),
                );
                line += 22.0;
            }
            if count > 1 {
                painter.text(
                    egui::pos2(screen.center().x, line),
                    egui::Align2::CENTER_TOP,
                    format!("{} / {}", index + 1, count),
                    egui::FontId::proportional(13.0),
                    egui::Color32::from_white_alpha(128),
                );
            }

            // Close button
            let close_rect = egui::Rect::from_center_size(
                screen.right_top() + egui::vec2(-40.0, 40.0),
                egui::vec2(36.0, 36.0),
            );
            if ui
                .put(close_rect, egui::Button::new(egui::RichText::new("✕").size(20.0)).frame(false))
                .on_hover_text("Close (Esc)")
                .clicked()
            {
                action = LightboxAction::Close;
            }

            if count > 1 {
                let arrow = egui::vec2(44.0, 44.0);
                let left = egui::Rect::from_center_size(
                    egui::pos2(screen.left() + 36.0, image_area.center().y),
                    arrow,
                );
                let right = egui::Rect::from_center_size(
                    egui::pos2(screen.right() - 36.0, image_area.center().y),
                    arrow,
                );
                if ui
                    .put(left, egui::Button::new(egui::RichText::new("◀").size(18.0)).rounding(22.0))
                    .clicked()
                {
                    action = LightboxAction::Previous;
                }
                if ui
                    .put(right, egui::Button::new(egui::RichText::new("▶").size(18.0)).rounding(22.0))
                    .clicked()
                {
                    action = LightboxAction::Next;
                }
            }

            if strip_height > 0.0 {
                if let Some(target) = thumbnail_strip(ui, ctx, artworks, index, cache, screen) {
                    action = LightboxAction::GoTo(target);
                }
            }
        });

    action
}

fn thumbnail_strip(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    artworks: &[Artwork],
    current: usize,
    cache: &mut ImageCache,
    screen: egui::Rect,
) -> Option<usize> {
    let gap = 8.0;
    let total = artworks.len() as f32 * (THUMB + gap) - gap;
    let mut x = screen.center().x - total / 2.0;
    let y = screen.bottom() - THUMB - 24.0;
    let mut clicked = None;

    for (i, artwork) in artworks.iter().enumerate() {
        let rect = egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(THUMB, THUMB));
        let response = ui.allocate_rect(rect, egui::Sense::click());
        let image = cache.get(&artwork.image, ctx);
        let tint = if i == current {
            egui::Color32::WHITE
        } else {
            egui::Color32::from_white_alpha(150)
        };
        images::paint_cover(ui.painter(), rect, image, "", tint);
        if i == current {
            ui.painter()
                .rect_stroke(rect, 2.0, egui::Stroke::new(2.0, egui::Color32::WHITE));
        }
        if response.clicked() {
            clicked = Some(i);
        }
        x += THUMB + gap;
    }

    clicked
}
