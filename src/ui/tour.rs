// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Tour section: one date at a time over its background image.

use super::images::{self, ImageCache};
use super::theme;
use crate::models::content::TourDate;
use crate::models::navigator::Navigator;

/// Result of slider interaction.
pub enum TourAction {
    None,
    Previous,
    Next,
    GoTo(usize),
}

/// Display the slider. `reveal` fades the current slide in, `0.0..=1.0`.
pub fn show(
    ui: &mut egui::Ui,
    slider: &Navigator<TourDate>,
    cache: &mut ImageCache,
    reveal: f32,
    is_mobile: bool,
) -> TourAction {
    let mut action = TourAction::None;
    theme::section_heading(ui, "Upcoming", "Tour");

    let (Some(date), Some(index)) = (slider.current(), slider.index()) else {
        ui.label(egui::RichText::new("No upcoming dates.").weak());
        return action;
    };

    let height = if is_mobile { 500.0 } else { 640.0 };
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );

    let alpha = (reveal.clamp(0.0, 1.0) * 255.0) as u8;
    let background = date
        .background_image
        .as_deref()
        .and_then(|reference| cache.get(reference, ui.ctx()));
    let painter = ui.painter_at(rect);
    images::paint_cover(&painter, rect, background, "", egui::Color32::from_white_alpha(alpha));
    painter.rect_filled(rect, 0.0, egui::Color32::from_black_alpha(153));

    let mut content = ui.child_ui(
        rect.shrink2(egui::vec2(if is_mobile { 72.0 } else { 120.0 }, 48.0)),
        egui::Layout::top_down(egui::Align::Min),
        None,
    );
    content.add_space(height * 0.25);
    let faded = |c: egui::Color32| c.gamma_multiply(reveal.clamp(0.0, 1.0));
    content.label(
        egui::RichText::new(format!("{} | {}", date.date, date.time).to_uppercase())
            .size(14.0)
            .color(faded(egui::Color32::from_white_alpha(204))),
    );
    content.add_space(16.0);
    content.label(
        egui::RichText::new(date.venue.to_uppercase())
            .size(if is_mobile { 36.0 } else { 60.0 })
            .color(faded(egui::Color32::WHITE)),
    );
    content.add_space(16.0);
    content.label(
        egui::RichText::new(format!("📍 {}", date.location))
            .size(18.0)
            .color(faded(egui::Color32::from_white_alpha(230))),
    );
    if let Some(url) = &date.ticket_url {
        content.add_space(24.0);
        let label = egui::RichText::new("GET TICKETS →").size(16.0);
        if url.starts_with("http") {
            content.hyperlink_to(label, url);
        } else {
            // Placeholder link such as "#"
            content.label(label.weak());
        }
    }

    // Arrows
    let arrow = egui::vec2(48.0, 48.0);
    let left = egui::Rect::from_center_size(egui::pos2(rect.left() + 40.0, rect.center().y), arrow);
    let right = egui::Rect::from_center_size(egui::pos2(rect.right() - 40.0, rect.center().y), arrow);
    if ui
        .put(left, egui::Button::new(egui::RichText::new("◀").size(18.0)).rounding(24.0))
        .clicked()
    {
        action = TourAction::Previous;
    }
    if ui
        .put(right, egui::Button::new(egui::RichText::new("▶").size(18.0)).rounding(24.0))
        .clicked()
    {
        action = TourAction::Next;
    }

    // Pagination
    ui.add_space(16.0);
    ui.horizontal_wrapped(|ui| {
        for (i, other) in slider.items().iter().enumerate() {
            let text = egui::RichText::new(short_date(&other.date).to_uppercase()).size(12.0);
            let text = if i == index { text.color(theme::CARMINE) } else { text };
            if ui.selectable_label(i == index, text).clicked() {
                action = TourAction::GoTo(i);
            }
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{:02} / {:02}", index + 1, slider.len()))
                    .monospace()
                    .color(theme::MUTED),
            );
        });
    });

    action
}

/// "20 November 2024" -> "Nov 2024"; other formats are shown as given.
pub fn short_date(date: &str) -> String {
    let parts: Vec<&str> = date.split_whitespace().collect();
    match parts.as_slice() {
        [_, month, year] if month.len() >= 3 && month.is_char_boundary(3) => {
            format!("{} {}", &month[..3], year)
        }
        _ => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("20 November 2024"), "Nov 2024");
        assert_eq!(short_date("6 December 2024"), "Dec 2024");
        assert_eq!(short_date("2024-11-20"), "2024-11-20");
    }
}
