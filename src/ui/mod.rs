// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio page.

pub mod contact;
pub mod gallery;
pub mod images;
pub mod lightbox;
pub mod music;
pub mod navigation;
pub mod player;
pub mod sections;
pub mod theme;
pub mod tour;
