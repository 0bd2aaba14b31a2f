// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Top bar with the file menu and the section navigation menu.
//!
//! The section list highlights whichever section the tracker reports as
//! active. Picking an entry closes the menu and asks the app to scroll there.

use crate::models::sections::{SectionTracker, NAV_SECTIONS};
use super::theme;

/// Result of top bar interaction.
pub enum NavAction {
    None,
    ToggleMenu,
    JumpTo(&'static str),
    OpenContent,
    ExportYaml,
    ExportJson,
    Quit,
}

/// Display the top bar.
pub fn show_bar(ui: &mut egui::Ui, artist: &str, menu_open: bool) -> NavAction {
    let mut action = NavAction::None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Open Content...").clicked() {
                action = NavAction::OpenContent;
                ui.close_menu();
            }
            ui.separator();
            ui.menu_button("Export Content", |ui| {
                if ui.button("Export as YAML...").clicked() {
                    action = NavAction::ExportYaml;
                    ui.close_menu();
                }
                if ui.button("Export as JSON...").clicked() {
                    action = NavAction::ExportJson;
                    ui.close_menu();
                }
            });
            ui.separator();
            if ui.button("Quit").clicked() {
                action = NavAction::Quit;
            }
        });

        ui.separator();
        ui.label(egui::RichText::new(artist).strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = egui::RichText::new("MENU").monospace();
            let label = if menu_open { label.color(theme::CARMINE) } else { label };
            if ui.selectable_label(menu_open, label).clicked() {
                action = NavAction::ToggleMenu;
            }
        });
    });

    action
}

/// Display the section list. Only called while the menu is open.
pub fn show_menu(ctx: &egui::Context, tracker: &SectionTracker) -> NavAction {
    let mut action = NavAction::None;

    egui::Area::new(egui::Id::new("nav_menu"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-24.0, 40.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .inner_margin(egui::Margin::same(24.0))
                .show(ui, |ui| {
                    ui.set_min_width(200.0);
                    for (id, label) in NAV_SECTIONS {
                        let text = egui::RichText::new(label.to_uppercase()).size(14.0);
                        let text = if tracker.is_active(id) {
                            text.color(theme::CARMINE)
                        } else {
                            text
                        };
                        if ui.add(egui::Label::new(text).sense(egui::Sense::click())).clicked() {
                            action = NavAction::JumpTo(id);
                        }
                        ui.add_space(8.0);
                    }
                });
        });

    action
}
