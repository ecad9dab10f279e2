// SPDX-License-Identifier: MPL-2.0
//! `iced_deck` is a small drawer-and-tabs application shell built with the
//! Iced GUI framework.
//!
//! It wires a localized navigation layout (drawer + bottom tabs) to a single
//! dispatch-driven UI state store, with a profile photo capture flow that
//! persists one image file under the platform data directory.

pub mod app;
pub mod capture;
pub mod config;
pub mod error;
pub mod i18n;
pub mod photo;
pub mod store;
pub mod ui;
