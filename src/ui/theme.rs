// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shared colors and section headings.

pub const CARMINE: egui::Color32 = egui::Color32::from_rgb(0x96, 0x00, 0x18);
pub const VIOLET: egui::Color32 = egui::Color32::from_rgb(0x6b, 0x46, 0xc1);
pub const MUTED: egui::Color32 = egui::Color32::from_gray(150);

/// Vertical padding around each page section.
pub const SECTION_PADDING: f32 = 96.0;

/// Small uppercase label above a large section title.
pub fn section_heading(ui: &mut egui::Ui, eyebrow: &str, title: &str) {
    ui.label(
        egui::RichText::new(eyebrow.to_uppercase())
            .size(12.0)
            .color(MUTED),
    );
    ui.label(egui::RichText::new(title).size(48.0).strong());
    ui.add_space(32.0);
}

/// Optional metadata line, e.g. a year or a duration.
pub fn meta(ui: &mut egui::Ui, text: Option<&str>) {
    if let Some(text) = text {
        ui.label(egui::RichText::new(text.to_uppercase()).size(12.0).color(MUTED));
    }
}
