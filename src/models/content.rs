// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio content records.
//!
//! Everything the page displays is described here: tracks, artworks, tour
//! dates, video sets, journal entries and social links. Records are loaded
//! once (built-in defaults or a content file) and never mutated afterwards.

use super::settings::Settings;
use serde::{Deserialize, Serialize};

/// Identity of a content item, used for equality checks across views.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Id(u32),
    Url(String),
    Video(String),
}

/// Common view of every content record.
pub trait Item {
    /// Stable identity of the item.
    fn key(&self) -> ItemKey;

    /// Display title.
    fn title(&self) -> &str;
}

/// An image in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u32,
    pub title: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

/// An embeddable audio track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub embed_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Track {
    /// Name of the service hosting the embed, derived from its URL.
    pub fn provider(&self) -> &'static str {
        if self.embed_url.contains("spotify.com") {
            "Spotify"
        } else if self.embed_url.contains("soundcloud.com") {
            "SoundCloud"
        } else {
            "Web"
        }
    }
}

/// A concert in the tour slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourDate {
    pub id: u32,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

/// A recorded live set hosted on YouTube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSet {
    /// YouTube video id.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VideoSet {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Text,
    Quote,
    Sketch,
    Philosophy,
    BehindTheScenes,
    Idea,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Text => "Note",
            EntryKind::Quote => "Quote",
            EntryKind::Sketch => "Sketch",
            EntryKind::Philosophy => "Philosophy",
            EntryKind::BehindTheScenes => "Behind the Scenes",
            EntryKind::Idea => "Idea",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryCategory {
    Process,
    Reflection,
    WorkInProgress,
}

/// A note in the field journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EntryCategory>,
}

impl JournalEntry {
    pub fn is_work_in_progress(&self) -> bool {
        self.category == Some(EntryCategory::WorkInProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Artist identity shown in the hero and contact sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub contact_email: String,
}

/// Complete page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub artworks: Vec<Artwork>,
    #[serde(default)]
    pub tour_dates: Vec<TourDate>,
    #[serde(default)]
    pub video_sets: Vec<VideoSet>,
    #[serde(default)]
    pub journal: Vec<JournalEntry>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub settings: Settings,
}

impl Item for Artwork {
    fn key(&self) -> ItemKey {
        ItemKey::Id(self.id)
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Item for Track {
    fn key(&self) -> ItemKey {
        ItemKey::Url(self.embed_url.clone())
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Item for TourDate {
    fn key(&self) -> ItemKey {
        ItemKey::Id(self.id)
    }

    fn title(&self) -> &str {
        &self.venue
    }
}

impl Item for VideoSet {
    fn key(&self) -> ItemKey {
        ItemKey::Video(self.id.clone())
    }

    fn title(&self) -> &str {
        &self.title
    }
}

fn artwork(id: u32, image: &str, year: &str) -> Artwork {
    Artwork {
        id,
        title: format!("Cover Art {:02}", id),
        image: image.to_string(),
        year: Some(year.to_string()),
    }
}

fn tour_date(id: u32, date: &str, venue: &str, location: &str) -> TourDate {
    TourDate {
        id,
        date: date.to_string(),
        time: "18:00 - 23:00".to_string(),
        venue: venue.to_string(),
        location: location.to_string(),
        ticket_url: Some("#".to_string()),
        background_image: Some(format!("tour/tour{}.jpg", id)),
    }
}

fn entry(
    id: u32,
    kind: EntryKind,
    content: &str,
    date: &str,
    author: Option<&str>,
    category: EntryCategory,
) -> JournalEntry {
    JournalEntry {
        id,
        kind,
        content: content.to_string(),
        date: Some(date.to_string()),
        author: author.map(str::to_string),
        category: Some(category),
    }
}

impl Default for Content {
    /// Placeholder content shown until a content file is loaded.
    fn default() -> Self {
        let tracks = vec![
            Track {
                embed_url: "https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC?utm_source=generator".to_string(),
                title: "Track Title 1".to_string(),
                artist: Some("Pablo Rosa".to_string()),
                duration: Some("3:45".to_string()),
            },
            Track {
                embed_url: "https://open.spotify.com/embed/track/1Je1IMUlBXcx1Fz0WE7oPT?utm_source=generator".to_string(),
                title: "Track Title 2".to_string(),
                artist: Some("Pablo Rosa".to_string()),
                duration: Some("4:12".to_string()),
            },
            Track {
                embed_url: "https://w.soundcloud.com/player/?url=https%3A//api.soundcloud.com/tracks/123456789".to_string(),
                title: "SoundCloud Track".to_string(),
                artist: Some("Pablo Rosa".to_string()),
                duration: None,
            },
        ];

        let artworks = vec![
            artwork(1, "gallery/cover01.jpg", "2024"),
            artwork(2, "gallery/cover02.jpg", "2024"),
            artwork(3, "gallery/cover03.jpg", "2023"),
            artwork(4, "gallery/cover04.jpg", "2023"),
            artwork(5, "gallery/cover05.jpg", "2022"),
            artwork(6, "gallery/cover06.jpg", "2022"),
        ];

        let tour_dates = vec![
            tour_date(1, "20 November 2024", "Videotron Center", "Manhattan, NY, United States"),
            tour_date(2, "6 December 2024", "Spotify On Stage", "Suncorp Stadium, Brisbane, Australia"),
            tour_date(3, "15 February 2025", "Halloween Bitchy Land", "Mediolanum Forum, Milan, Italy"),
            tour_date(4, "28 April 2025", "Cornelius - Singha Light", "Odyssey (SSE Belfast), Belfast, United Kingdom"),
        ];

        let video_sets = vec![
            VideoSet {
                id: "dQw4w9WgXcQ".to_string(),
                title: "Live Set - Ambient Sessions".to_string(),
                date: Some("2024".to_string()),
                description: Some("A journey through ambient textures and rhythmic explorations.".to_string()),
            },
            VideoSet {
                id: "jNQXAC9IVRw".to_string(),
                title: "Live Set - Electronic Minimalism".to_string(),
                date: Some("2024".to_string()),
                description: Some("Minimalist compositions in a live setting.".to_string()),
            },
            VideoSet {
                id: "9bZkp7q19f0".to_string(),
                title: "Live Set - Field Recordings".to_string(),
                date: Some("2023".to_string()),
                description: Some("Captured moments from global travels and sonic discoveries.".to_string()),
            },
        ];

        use EntryCategory::*;
        use EntryKind::*;
        let journal = vec![
            entry(1, Philosophy, "The space between notes holds as much meaning as the notes themselves. In that silence, we find our rhythm.", "2024", None, Reflection),
            entry(2, Quote, "Music is the silence between the notes.", "2024", Some("Claude Debussy"), Reflection),
            entry(3, BehindTheScenes, "Every field recording is a snapshot of time. A moment captured, then transformed. The raw becomes refined, the accidental becomes intentional.", "2023", None, Process),
            entry(4, Sketch, "[Visual sketch placeholder]", "2024", None, WorkInProgress),
            entry(5, Philosophy, "Design is not about decoration. It's about creating spaces where ideas can breathe and emotions can flow.", "2023", None, Reflection),
            entry(6, Idea, "Experimenting with layering ambient textures over minimal percussion. The tension between empty space and dense moments creates movement.", "2024", None, WorkInProgress),
            entry(7, BehindTheScenes, "Today's session: capturing the sound of rain on different surfaces. Each texture tells a different story.", "2024", None, Process),
            entry(8, Quote, "The composition must be so constructed that it is able to convey the composer's musical ideas to the mind of the listener.", "2024", Some("Arnold Schoenberg"), Reflection),
        ];

        let social = [
            ("Instagram", "https://instagram.com"),
            ("Spotify", "https://spotify.com"),
            ("SoundCloud", "https://soundcloud.com"),
            ("YouTube", "https://youtube.com"),
            ("Bandcamp", "https://bandcamp.com"),
            ("Twitter", "https://twitter.com"),
        ]
        .into_iter()
        .map(|(name, url)| SocialLink {
            name: name.to_string(),
            url: url.to_string(),
        })
        .collect();

        Self {
            profile: Profile {
                name: "Pablo Rosa".to_string(),
                tagline: "A global creative sanctuary, where music, identity, and philosophy breathe in rhythm.".to_string(),
                keywords: ["Minimal", "Global", "Reflective", "Cinematic", "Textural", "Emotional"]
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                contact_email: "hello@pablorosa.com".to_string(),
            },
            tracks,
            artworks,
            tour_dates,
            video_sets,
            journal,
            social,
            settings: Settings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_identity_is_embed_url() {
        let content = Content::default();
        let a = &content.tracks[0];
        let mut renamed = a.clone();
        renamed.title = "Renamed".to_string();

        assert_eq!(a.key(), renamed.key());
        assert_ne!(a.key(), content.tracks[1].key());
    }

    #[test]
    fn test_provider_from_embed_url() {
        let content = Content::default();
        assert_eq!(content.tracks[0].provider(), "Spotify");
        assert_eq!(content.tracks[2].provider(), "SoundCloud");
    }

    #[test]
    fn test_default_content_ids_are_unique() {
        let content = Content::default();
        let mut ids: Vec<u32> = content.artworks.iter().map(|a| a.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), content.artworks.len());
        assert_eq!(content.tour_dates.len(), 4);
    }

    #[test]
    fn test_journal_kind_uses_kebab_case() {
        let yaml = "id: 3\ntype: behind-the-scenes\ncontent: rain\ncategory: work-in-progress\n";
        let entry: JournalEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.kind, EntryKind::BehindTheScenes);
        assert_eq!(entry.category, Some(EntryCategory::WorkInProgress));
        assert!(entry.is_work_in_progress());
        assert_eq!(entry.date, None);
    }

    #[test]
    fn test_watch_url() {
        let set = &Content::default().video_sets[0];
        assert_eq!(set.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }
}
