// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Player drawer for the selected track.
//!
//! The embedded player itself is external; the drawer shows the track details
//! and links out to the embed. It docks at the bottom in the compact layout
//! and on the right otherwise.

use super::theme;
use crate::models::content::Track;

pub enum PlayerAction {
    None,
    Close,
}

pub fn show(ctx: &egui::Context, track: &Track, is_mobile: bool) -> PlayerAction {
    let mut action = PlayerAction::None;
    let contents = |ui: &mut egui::Ui, action: &mut PlayerAction| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("{}_PLAYER", track.provider().to_uppercase()))
                    .monospace()
                    .color(theme::MUTED),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✕").on_hover_text("Close player (Esc)").clicked() {
                    *action = PlayerAction::Close;
                }
            });
        });
        ui.separator();
        ui.add_space(12.0);
        ui.label(egui::RichText::new(&track.title).size(24.0).strong());
        if let Some(artist) = &track.artist {
            ui.label(egui::RichText::new(artist).color(theme::MUTED));
        }
        if let Some(duration) = &track.duration {
            ui.label(
                egui::RichText::new(format!("DURATION: {}", duration))
                    .monospace()
                    .size(12.0),
            );
        }
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(12.0);
        ui.hyperlink_to(format!("Listen on {} ↗", track.provider()), &track.embed_url);
    };

    if is_mobile {
        egui::TopBottomPanel::bottom("player_drawer_bottom")
            .resizable(false)
            .show(ctx, |ui| contents(ui, &mut action));
    } else {
        egui::SidePanel::right("player_drawer_side")
            .default_width(360.0)
            .resizable(false)
            .show(ctx, |ui| contents(ui, &mut action));
    }

    action
}
