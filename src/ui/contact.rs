// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact and booking form.

use super::theme;
use crate::models::contact::ContactForm;
use std::time::Instant;

pub fn show(ui: &mut egui::Ui, form: &mut ContactForm, email: &str, is_mobile: bool, now: Instant) {
    theme::section_heading(ui, "Get in touch", "Contact & Booking");
    ui.label("For collaborations, bookings, or inquiries about work.");
    ui.hyperlink_to(
        egui::RichText::new(email).color(theme::CARMINE),
        format!("mailto:{}", email),
    );
    ui.add_space(32.0);

    let sent = form.is_sent();
    ui.add_enabled_ui(!sent, |ui| {
        let field_width = if is_mobile {
            ui.available_width()
        } else {
            (ui.available_width() - 24.0) / 2.0
        };
        let fields = |ui: &mut egui::Ui, form: &mut ContactForm| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("NAME").size(12.0).color(theme::MUTED));
                ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(field_width));
            });
            ui.vertical(|ui| {
                ui.label(egui::RichText::new("EMAIL").size(12.0).color(theme::MUTED));
                ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(field_width));
            });
        };
        if is_mobile {
            fields(ui, form);
        } else {
            ui.horizontal(|ui| fields(ui, form));
        }

        ui.add_space(16.0);
        ui.label(egui::RichText::new("MESSAGE").size(12.0).color(theme::MUTED));
        ui.add(
            egui::TextEdit::multiline(&mut form.message)
                .desired_rows(8)
                .desired_width(f32::INFINITY),
        );
    });

    ui.add_space(16.0);
    let label = if sent { "MESSAGE SENT ✓" } else { "SEND MESSAGE" };
    if ui
        .add_enabled(!sent, egui::Button::new(egui::RichText::new(label).size(14.0)))
        .clicked()
    {
        form.submit(now);
    }

    if let Some(error) = form.error() {
        ui.colored_label(theme::CARMINE, error.to_string());
    }
}
