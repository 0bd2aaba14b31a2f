// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Music section: a list of tracks, each opening the player drawer.

use super::theme;
use crate::models::content::Track;
use crate::models::selection::SelectionStore;

/// Display the track list. Selecting a track goes straight to the store.
pub fn show(ui: &mut egui::Ui, tracks: &[Track], player: &mut SelectionStore<Track>) {
    theme::section_heading(ui, "Listen", "Music");

    for track in tracks {
        let active = player.is_active(track);
        let stroke = if active {
            egui::Stroke::new(2.0, theme::CARMINE)
        } else {
            egui::Stroke::new(1.0, egui::Color32::from_gray(60))
        };

        egui::Frame::group(ui.style())
            .stroke(stroke)
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&track.title).size(20.0));
                        theme::meta(ui, track.artist.as_deref());
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if active { "NOW PLAYING" } else { "PLAY" };
                        if ui.button(label).clicked() && !active {
                            player.select(track.clone());
                        }
                        theme::meta(ui, track.duration.as_deref());
                        ui.label(egui::RichText::new(track.provider()).weak());
                    });
                });
            });
        ui.add_space(12.0);
    }

    if tracks.is_empty() {
        ui.label(egui::RichText::new("No tracks yet.").weak());
    }
}
