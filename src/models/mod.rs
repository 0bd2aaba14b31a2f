// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio content and the view state shared across sections.

pub mod contact;
pub mod content;
pub mod navigator;
pub mod sections;
pub mod selection;
pub mod settings;
