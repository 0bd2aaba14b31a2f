// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Reading and writing content files as YAML or JSON.

use crate::models::content::Content;
use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// On-disk representation of a content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Yaml,
    Json,
}

impl ContentFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            other => Err(anyhow!("Unsupported file extension: {:?}", other)),
        }
    }

    pub fn parse(self, text: &str) -> Result<Content> {
        let content = match self {
            Self::Yaml => serde_yaml::from_str(text)?,
            Self::Json => serde_json::from_str(text)?,
        };
        Ok(content)
    }

    pub fn render(self, content: &Content) -> Result<String> {
        let text = match self {
            Self::Yaml => serde_yaml::to_string(content)?,
            Self::Json => serde_json::to_string_pretty(content)?,
        };
        Ok(text)
    }
}

/// Read a content file in the format its extension names.
pub fn load(path: &Path) -> Result<Content> {
    let read = || -> Result<Content> {
        let format = ContentFormat::from_path(path)?;
        format.parse(&std::fs::read_to_string(path)?)
    };
    read().with_context(|| format!("Failed to load content from {}", path.display()))
}

/// Write `content` in the format the extension of `path` names.
pub fn save(content: &Content, path: &Path) -> Result<()> {
    let text = ContentFormat::from_path(path)?.render(content)?;
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
