// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Folio - a single-page artist portfolio
//!
//! A desktop viewer for an artist's music, artwork, tour dates, live sets
//! and journal, with a lightbox, a player drawer and a contact form.
//! Content comes from a YAML/JSON file given on the command line, or from
//! built-in placeholder content.

mod app;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::FolioApp;
use models::content::Content;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let content_path = std::env::args_os().nth(1).map(PathBuf::from);
    let content = match &content_path {
        Some(path) => io::content::load(path)?,
        None => {
            log::info!("No content file given, using built-in content");
            Content::default()
        }
    };

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 600.0])
            .with_title(app::APP_TITLE),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        app::APP_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(FolioApp::new(&cc.egui_ctx, content, content_path)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
