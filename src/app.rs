// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the shared view state (lightbox, tour slider, player
//! selection, active section, forms) and wires it to the section views. Views
//! report what the user did through small action enums; the app applies
//! them to the state.

use crate::models::{
    contact::{ContactForm, NewsletterForm},
    content::{Artwork, Content, Item, TourDate, Track},
    navigator::{NavKey, Navigator, Transition},
    sections::{SectionBounds, SectionTracker, NAV_SECTIONS},
    selection::SelectionStore,
};
use crate::ui::{
    contact, gallery, images::ImageCache, lightbox, music, navigation, player, sections, theme,
    tour,
};
use crate::util::{easing::ScrollAnimation, viewport::ViewportWatcher};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

pub const APP_TITLE: &str = "Folio";

/// Result of background content loading.
type LoadedContent = Result<(PathBuf, Content), String>;

/// Records where each page section ended up inside the scroll area.
struct PageLayout {
    origin: f32,
    bounds: Vec<SectionBounds>,
}

impl PageLayout {
    fn new(ui: &egui::Ui) -> Self {
        Self {
            origin: ui.cursor().top(),
            bounds: Vec::with_capacity(NAV_SECTIONS.len()),
        }
    }

    fn section<R>(&mut self, ui: &mut egui::Ui, name: &str, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
        let top = ui.cursor().top() - self.origin;
        ui.add_space(theme::SECTION_PADDING);
        let result = add(ui);
        ui.add_space(theme::SECTION_PADDING);
        let bottom = ui.cursor().top() - self.origin;
        self.bounds.push(SectionBounds::new(name, top, bottom - top));
        result
    }
}

/// Main application state.
pub struct FolioApp {
    /// Content currently displayed
    content: Content,

    /// File the content came from, if any
    content_path: Option<PathBuf>,

    images: ImageCache,

    /// Gallery lightbox
    lightbox: Navigator<Artwork>,
    lightbox_fade: Option<Transition>,

    /// Tour slider, open whenever there are tour dates
    tour: Navigator<TourDate>,
    tour_fade: Option<Transition>,

    /// Selected track; drives the player drawer
    player: SelectionStore<Track>,

    tracker: SectionTracker,
    viewport: ViewportWatcher,
    menu_open: bool,

    /// Animated jump to a section, if one is running
    scroll: Option<ScrollAnimation>,
    /// Scroll offset reported by the last frame
    scroll_offset: f32,

    contact: ContactForm,
    newsletter: NewsletterForm,

    /// Receiver for background content loading
    content_loader: Option<Receiver<LoadedContent>>,

    /// Loading state message
    loading_message: Option<String>,
}

impl FolioApp {
    /// Create the application showing `content`.
    pub fn new(ctx: &egui::Context, content: Content, content_path: Option<PathBuf>) -> Self {
        let settings = content.settings.clone();
        let base_dir = content_path.as_deref().and_then(crate::ui::images::base_dir_of);

        let mut player = SelectionStore::new();
        player.subscribe(|track: Option<&Track>| match track {
            Some(track) => log::info!("Now playing: {} ({})", track.title(), track.provider()),
            None => log::info!("Player closed"),
        });
        let title_ctx = ctx.clone();
        player.subscribe(move |track: Option<&Track>| {
            let title = match track {
                Some(track) => format!("{} - Now playing: {}", APP_TITLE, track.title),
                None => APP_TITLE.to_string(),
            };
            title_ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        });

        let mut app = Self {
            content: Content::default(),
            content_path: None,
            images: ImageCache::new(base_dir),
            lightbox: Navigator::new(),
            lightbox_fade: None,
            tour: Navigator::new(),
            tour_fade: None,
            player,
            tracker: SectionTracker::new(NAV_SECTIONS[0].0, settings.lookahead_offset),
            viewport: ViewportWatcher::new(settings.mobile_breakpoint, settings.resize_settle()),
            menu_open: false,
            scroll: None,
            scroll_offset: 0.0,
            contact: ContactForm::new(settings.contact_reset()),
            newsletter: NewsletterForm::default(),
            content_loader: None,
            loading_message: None,
        };
        app.apply_content(content, content_path);
        app
    }

    /// Replace the displayed content and reset the state bound to it.
    fn apply_content(&mut self, content: Content, path: Option<PathBuf>) {
        let settings = &content.settings;
        self.images
            .reset(path.as_deref().and_then(crate::ui::images::base_dir_of));
        self.lightbox.close();
        self.lightbox_fade = None;
        self.tour.close();
        self.tour.open(content.tour_dates.clone(), 0);
        self.tour_fade = None;
        self.player.clear();
        self.tracker = SectionTracker::new(NAV_SECTIONS[0].0, settings.lookahead_offset);
        self.viewport = ViewportWatcher::new(settings.mobile_breakpoint, settings.resize_settle());
        self.contact = ContactForm::new(settings.contact_reset());
        self.scroll = None;

        log::info!(
            "Showing content for {}: {} tracks, {} artworks, {} tour dates",
            content.profile.name,
            content.tracks.len(),
            content.artworks.len(),
            content.tour_dates.len()
        );
        self.content = content;
        self.content_path = path;
    }

    /// Import a content file (asynchronously).
    fn import_content(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.content_loader = Some(receiver);
        self.loading_message = Some(format!("Loading {}...", path.display()));

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = crate::io::content::load(&path)
                .map(|content| (path, content))
                .map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);
        });
    }

    /// Export the current content to a file.
    fn export_content(&self, path: PathBuf) {
        match crate::io::content::save(&self.content, &path) {
            Ok(_) => log::info!("Exported content to {}", path.display()),
            Err(e) => log::error!("Failed to export content: {}", e),
        }
    }

    fn poll_content_loader(&mut self) {
        let Some(receiver) = &self.content_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.content_loader = None;
        self.loading_message = None;

        match result {
            Ok((path, content)) => {
                log::info!("Loaded content from {}", path.display());
                self.apply_content(content, Some(path));
            }
            Err(e) => log::error!("{}", e),
        }
    }

    /// Escape and arrow keys. The lightbox takes them first while open.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let key = ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) {
                Some(NavKey::Escape)
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                Some(NavKey::ArrowLeft)
            } else if i.key_pressed(egui::Key::ArrowRight) {
                Some(NavKey::ArrowRight)
            } else {
                None
            }
        });
        let Some(key) = key else {
            return;
        };

        if self.lightbox.is_open() {
            self.lightbox.handle(key);
        } else if key == NavKey::Escape {
            if self.player.is_open() {
                self.player.clear();
            } else {
                self.menu_open = false;
            }
        }
    }

    fn jump_to(&mut self, section: &str, now: Instant) {
        self.menu_open = false;
        let Some(top) = self.tracker.top_of(section) else {
            log::debug!("No layout yet for section {}", section);
            return;
        };
        let settings = &self.content.settings;
        let target = (top + settings.scroll_offset).max(0.0);
        self.scroll = Some(ScrollAnimation::new(
            self.scroll_offset,
            target,
            now,
            settings.scroll_duration(),
        ));
    }

    fn apply_nav_action(&mut self, action: navigation::NavAction, ctx: &egui::Context, now: Instant) {
        match action {
            navigation::NavAction::ToggleMenu => self.menu_open = !self.menu_open,
            navigation::NavAction::JumpTo(section) => self.jump_to(section, now),
            navigation::NavAction::OpenContent => {
                // Open native file picker
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Content", &["yaml", "yml", "json"])
                    .pick_file()
                {
                    self.import_content(path);
                }
            }
            navigation::NavAction::ExportYaml => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("YAML", &["yaml", "yml"])
                    .set_file_name("portfolio.yaml")
                    .save_file()
                {
                    self.export_content(path);
                }
            }
            navigation::NavAction::ExportJson => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .set_file_name("portfolio.json")
                    .save_file()
                {
                    self.export_content(path);
                }
            }
            navigation::NavAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            navigation::NavAction::None => {}
        }
    }

    /// Draw every section inside the page scroll area and record the layout.
    fn show_page(&mut self, ui: &mut egui::Ui, now: Instant) -> (gallery::GalleryAction, tour::TourAction) {
        let is_mobile = self.viewport.is_mobile();
        let viewport_height = ui.available_height();
        let tour_fade = self.content.settings.tour_fade();
        let tour_reveal = fade_progress(&mut self.tour_fade, &self.tour, now, tour_fade);
        if tour_reveal < 1.0 {
            ui.ctx().request_repaint();
        }

        let mut area = egui::ScrollArea::vertical()
            .id_source("page")
            .auto_shrink([false, false])
            .enable_scrolling(!self.lightbox.is_open() && !self.player.is_open());
        if let Some(animation) = self.scroll {
            area = area.vertical_scroll_offset(animation.offset(now));
            if animation.is_finished(now) {
                self.scroll = None;
            } else {
                ui.ctx().request_repaint();
            }
        }

        let mut gallery_action = gallery::GalleryAction::None;
        let mut tour_action = tour::TourAction::None;
        let margin = if is_mobile { 24.0 } else { 64.0 };

        let output = area.show(ui, |ui| {
            egui::Frame::none()
                .inner_margin(egui::Margin::symmetric(margin, 0.0))
                .show(ui, |ui| {
                    let mut layout = PageLayout::new(ui);
                    let content = &self.content;

                    layout.section(ui, "intro", |ui| sections::hero(ui, &content.profile, viewport_height));
                    layout.section(ui, "music", |ui| music::show(ui, &content.tracks, &mut self.player));
                    gallery_action = layout.section(ui, "gallery", |ui| {
                        gallery::show(ui, &content.artworks, &mut self.images, is_mobile)
                    });
                    tour_action = layout.section(ui, "tour", |ui| {
                        tour::show(ui, &self.tour, &mut self.images, tour_reveal, is_mobile)
                    });
                    layout.section(ui, "sets", |ui| sections::video_sets(ui, &content.video_sets, is_mobile));
                    layout.section(ui, "journal", |ui| sections::journal(ui, &content.journal, is_mobile));
                    layout.section(ui, "connect", |ui| {
                        sections::social(ui, &content.social, &mut self.newsletter)
                    });
                    layout.section(ui, "contact", |ui| {
                        contact::show(ui, &mut self.contact, &content.profile.contact_email, is_mobile, now)
                    });
                    sections::footer(ui, &content.profile);

                    self.tracker.set_layout(layout.bounds);
                });
        });

        self.scroll_offset = output.state.offset.y;
        if self.tracker.sample(ui.ctx().frame_nr(), self.scroll_offset) {
            log::debug!("Active section is now {}", self.tracker.active());
        }

        (gallery_action, tour_action)
    }
}

/// Progress of the fade bound to the navigator's current state, restarting
/// it whenever the state has moved on.
fn fade_progress<T>(
    fade: &mut Option<Transition>,
    navigator: &Navigator<T>,
    now: Instant,
    duration: Duration,
) -> f32 {
    if fade.map_or(true, |f| f.is_stale(navigator)) {
        *fade = navigator
            .is_open()
            .then(|| Transition::start(navigator, now, duration));
    }
    fade.and_then(|f| f.progress(navigator, now)).unwrap_or(0.0)
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Check for completed content loading
        self.poll_content_loader();
        self.images.poll(ctx);

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() || self.images.is_loading() {
            ctx.request_repaint();
        }

        self.viewport.observe(ctx.screen_rect().width(), now);
        if self.viewport.is_settling() {
            ctx.request_repaint_after(self.content.settings.resize_settle());
        }

        self.contact.tick(now);
        if let Some(remaining) = self.contact.remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        self.handle_keys(ctx);

        // Top bar
        let nav_action = egui::TopBottomPanel::top("top_bar")
            .show(ctx, |ui| navigation::show_bar(ui, &self.content.profile.name, self.menu_open))
            .inner;
        self.apply_nav_action(nav_action, ctx, now);

        // Player drawer
        if let Some(track) = self.player.selected() {
            if let player::PlayerAction::Close = player::show(ctx, track, self.viewport.is_mobile()) {
                self.player.clear();
            }
        }

        // Page
        let (gallery_action, tour_action) = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(egui::RichText::new(message).size(16.0));
                        });
                    });
                    (gallery::GalleryAction::None, tour::TourAction::None)
                } else {
                    self.show_page(ui, now)
                }
            })
            .inner;

        match gallery_action {
            gallery::GalleryAction::Open(index) => {
                self.lightbox.open(self.content.artworks.clone(), index);
                log::info!("Opened lightbox at artwork {}", index);
            }
            gallery::GalleryAction::None => {}
        }

        match tour_action {
            tour::TourAction::Previous => self.tour.previous(),
            tour::TourAction::Next => self.tour.next(),
            tour::TourAction::GoTo(index) => self.tour.go_to(index),
            tour::TourAction::None => {}
        }

        // Overlays
        if self.menu_open {
            let action = navigation::show_menu(ctx, &self.tracker);
            self.apply_nav_action(action, ctx, now);
        }

        if self.lightbox.is_open() {
            let fade = self.content.settings.lightbox_fade();
            let opacity = fade_progress(&mut self.lightbox_fade, &self.lightbox, now, fade);
            if opacity < 1.0 {
                ctx.request_repaint();
            }
            match lightbox::show(ctx, &self.lightbox, &mut self.images, opacity, self.viewport.is_mobile()) {
                lightbox::LightboxAction::Close => {
                    self.lightbox.close();
                    log::info!("Closed lightbox");
                }
                lightbox::LightboxAction::Previous => self.lightbox.previous(),
                lightbox::LightboxAction::Next => self.lightbox.next(),
                lightbox::LightboxAction::GoTo(index) => self.lightbox.go_to(index),
                lightbox::LightboxAction::None => {}
            }
        } else {
            self.lightbox_fade = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_restarts_for_new_state() {
        let now = Instant::now();
        let mut nav = Navigator::new();
        nav.open(vec![1, 2, 3], 0);
        let mut fade = None;

        assert_eq!(fade_progress(&mut fade, &nav, now, Duration::from_secs(1)), 0.0);
        let later = now + Duration::from_millis(500);
        assert_eq!(fade_progress(&mut fade, &nav, later, Duration::from_secs(1)), 0.5);

        nav.next();
        assert_eq!(fade_progress(&mut fade, &nav, later, Duration::from_secs(1)), 0.0);
    }

    #[test]
    fn test_fade_is_dropped_when_closed() {
        let now = Instant::now();
        let mut nav = Navigator::new();
        nav.open(vec!['a'], 0);
        let mut fade = None;
        fade_progress(&mut fade, &nav, now, Duration::from_secs(1));

        nav.close();
        assert_eq!(fade_progress(&mut fade, &nav, now, Duration::from_secs(1)), 0.0);
        assert!(fade.is_none());
    }

    #[test]
    fn test_jump_survives_unusable_scroll_duration() {
        let mut content = Content::default();
        content.settings = serde_yaml::from_str("scroll_duration: .inf\n").unwrap();
        let ctx = egui::Context::default();
        let mut app = FolioApp::new(&ctx, content, None);
        app.tracker.set_layout(vec![SectionBounds::new("music", 900.0, 400.0)]);

        let now = Instant::now();
        app.jump_to("music", now);

        let animation = app.scroll.unwrap();
        assert!(!animation.is_finished(now));
        assert!(animation.is_finished(now + Duration::from_secs_f32(1.5)));
        assert_eq!(animation.offset(now + Duration::from_secs(2)), 800.0);
    }
}
