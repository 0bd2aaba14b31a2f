// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Layout and animation helpers.

pub mod easing;
pub mod geometry;
pub mod viewport;
