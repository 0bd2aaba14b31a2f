// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Static sections: hero, video sets, field journal, social links and footer.

use super::theme;
use crate::models::contact::NewsletterForm;
use crate::models::content::{EntryKind, JournalEntry, Profile, SocialLink, VideoSet};

pub fn hero(ui: &mut egui::Ui, profile: &Profile, viewport_height: f32) {
    let height = viewport_height.max(480.0);
    ui.allocate_ui(egui::vec2(ui.available_width(), height), |ui| {
        ui.set_min_height(height);
        ui.vertical_centered(|ui| {
            ui.add_space(height * 0.3);
            ui.label(egui::RichText::new(&profile.name).size(72.0).strong());
            ui.add_space(16.0);
            ui.label(egui::RichText::new(&profile.tagline).size(18.0));
            if !profile.keywords.is_empty() {
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(format!("{}.", profile.keywords.join(". ")))
                        .size(14.0)
                        .color(theme::MUTED),
                );
            }
            ui.add_space(48.0);
            ui.label(egui::RichText::new("↓").size(24.0).color(theme::MUTED));
        });
    });
}

pub fn video_sets(ui: &mut egui::Ui, sets: &[VideoSet], is_mobile: bool) {
    theme::section_heading(ui, "Live", "Sets");

    let columns = if is_mobile { 1 } else { 3 };
    egui::Grid::new("video_sets")
        .num_columns(columns)
        .spacing(egui::vec2(24.0, 24.0))
        .show(ui, |ui| {
            let width = (ui.available_width() - 24.0 * (columns - 1) as f32) / columns as f32;
            for (i, set) in sets.iter().enumerate() {
                ui.vertical(|ui| {
                    ui.set_width(width);
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(width, width * 9.0 / 16.0),
                        egui::Sense::click(),
                    );
                    let painter = ui.painter_at(rect);
                    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(20));
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "▶",
                        egui::FontId::proportional(36.0),
                        if response.hovered() { theme::CARMINE } else { egui::Color32::WHITE },
                    );
                    if response
                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                        .clicked()
                    {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(set.watch_url()));
                    }
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(&set.title).size(18.0));
                    theme::meta(ui, set.date.as_deref());
                    if let Some(description) = &set.description {
                        ui.label(egui::RichText::new(description).weak());
                    }
                });
                if (i + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });
}

pub fn journal(ui: &mut egui::Ui, entries: &[JournalEntry], is_mobile: bool) {
    theme::section_heading(ui, "Process & Philosophy", "Field Journal");

    let columns = if is_mobile { 1 } else { 2 };
    ui.columns(columns, |cols| {
        for (i, entry) in entries.iter().enumerate() {
            let ui = &mut cols[i % columns];
            let frame = egui::Frame::none()
                .fill(ui.visuals().faint_bg_color)
                .inner_margin(egui::Margin::same(20.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    journal_entry(ui, entry);
                });
            if entry.is_work_in_progress() {
                dashed_outline(ui.painter(), frame.response.rect);
            }
            ui.add_space(16.0);
        }
    });
}

fn journal_entry(ui: &mut egui::Ui, entry: &JournalEntry) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(entry.kind.label().to_uppercase())
                .size(11.0)
                .color(theme::VIOLET),
        );
        if let Some(line) = date_line(entry) {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(line).size(11.0).color(theme::MUTED));
            });
        }
    });
    ui.add_space(8.0);

    match entry.kind {
        EntryKind::Quote => {
            ui.label(
                egui::RichText::new(format!("“{}”", entry.content))
                    .size(18.0)
                    .italics(),
            );
            if let Some(author) = &entry.author {
                ui.label(egui::RichText::new(format!("— {}", author)).color(theme::MUTED));
            }
        }
        EntryKind::Sketch => {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), 120.0),
                egui::Sense::hover(),
            );
            ui.painter().rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
            );
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &entry.content,
                egui::FontId::proportional(13.0),
                theme::MUTED,
            );
        }
        _ => {
            ui.label(egui::RichText::new(&entry.content).size(15.0));
        }
    }
}

/// Date shown in an entry's header, marked when the work is unfinished.
fn date_line(entry: &JournalEntry) -> Option<String> {
    match (&entry.date, entry.is_work_in_progress()) {
        (Some(date), true) => Some(format!("{} • Work in Progress", date)),
        (None, true) => Some("Work in Progress".to_string()),
        (Some(date), false) => Some(date.clone()),
        (None, false) => None,
    }
}

fn dashed_outline(painter: &egui::Painter, rect: egui::Rect) {
    let stroke = egui::Stroke::new(1.0, theme::VIOLET.gamma_multiply(0.5));
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    painter.extend(egui::Shape::dashed_line(&corners, stroke, 6.0, 4.0));
}

pub fn social(ui: &mut egui::Ui, links: &[SocialLink], newsletter: &mut NewsletterForm) {
    theme::section_heading(ui, "Follow", "Connect");

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 32.0;
        for link in links {
            ui.hyperlink_to(egui::RichText::new(link.name.to_uppercase()).size(16.0), &link.url);
        }
    });

    ui.add_space(48.0);
    ui.label(egui::RichText::new("Newsletter").size(24.0));
    ui.label(
        egui::RichText::new("Receive updates on new releases, performances, and creative insights.")
            .color(theme::MUTED),
    );
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut newsletter.email)
                .hint_text("your@email.com")
                .desired_width(280.0),
        );
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("SUBSCRIBE").clicked() || submitted {
            newsletter.subscribe();
        }
    });
    if let Some(error) = newsletter.error() {
        ui.colored_label(theme::CARMINE, error.to_string());
    } else if !newsletter.subscribed().is_empty() {
        ui.label(egui::RichText::new("Thanks for subscribing.").color(theme::MUTED));
    }
    ui.label(
        egui::RichText::new("We respect your privacy. Unsubscribe at any time.")
            .size(11.0)
            .weak(),
    );
}

pub fn footer(ui: &mut egui::Ui, profile: &Profile) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!("© {}. All rights reserved.", profile.name).to_uppercase())
                .size(12.0)
                .color(theme::MUTED),
        );
    });
    ui.add_space(48.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::EntryCategory;

    fn entry(date: Option<&str>, category: Option<EntryCategory>) -> JournalEntry {
        JournalEntry {
            id: 1,
            kind: EntryKind::Sketch,
            content: "sketch".to_string(),
            date: date.map(str::to_string),
            author: None,
            category,
        }
    }

    #[test]
    fn test_work_in_progress_is_marked_after_date() {
        let wip = entry(Some("2024"), Some(EntryCategory::WorkInProgress));
        assert_eq!(date_line(&wip).as_deref(), Some("2024 • Work in Progress"));

        let undated = entry(None, Some(EntryCategory::WorkInProgress));
        assert_eq!(date_line(&undated).as_deref(), Some("Work in Progress"));
    }

    #[test]
    fn test_other_categories_show_plain_date() {
        let process = entry(Some("2023"), Some(EntryCategory::Process));
        assert_eq!(date_line(&process).as_deref(), Some("2023"));
        assert_eq!(date_line(&entry(None, None)), None);
    }
}
