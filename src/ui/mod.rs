// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! # Navigation chrome
//!
//! - [`navbar`] - Top bar with the drawer toggle and current screen title
//! - [`drawer`] - Side navigation panel with the profile photo header
//! - [`tab_bar`] - Bottom tab bar shown on the Home screen
//!
//! # Screens and overlays
//!
//! - [`screens`] - Search, Fav, Setting, Profile, and About screens
//! - [`camera`] - Capture overlay stacked over the whole UI
//!
//! # Shared infrastructure
//!
//! - [`avatar`] - Profile photo rendering with placeholder fallback
//! - [`styles`] - Centralized styling (panels, backdrop, tab buttons)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod avatar;
pub mod camera;
pub mod design_tokens;
pub mod drawer;
pub mod navbar;
pub mod screens;
pub mod styles;
pub mod tab_bar;
