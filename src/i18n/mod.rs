// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system. Translation files are embedded in
//! the binary and parsed once at startup; every locale is validated against
//! the full set of message keys the UI renders, so a missing translation is
//! a startup warning rather than a render-time surprise.

pub mod fluent;
