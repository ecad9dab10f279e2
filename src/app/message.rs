// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::photo::DataUri;
use crate::ui::camera;
use crate::ui::drawer;
use crate::ui::navbar;
use crate::ui::screens::about;
use crate::ui::screens::profile;
use crate::ui::screens::search;
use crate::ui::screens::setting;
use crate::ui::tab_bar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Drawer(drawer::Message),
    TabBar(tab_bar::Message),
    Search(search::Message),
    Setting(setting::Message),
    Profile(profile::Message),
    About(about::Message),
    Camera(camera::Message),
    /// Resolved startup language (persisted preference or fallback).
    LanguageLoaded(String),
    /// Result of probing the persisted profile photo on startup.
    ProfilePhotoLoaded(Result<Option<DataUri>, Error>),
    /// Image produced by the capture source; `None` when cancelled.
    CaptureReady(Option<DataUri>),
    /// Result of persisting a captured photo.
    ProfilePhotoSaved(Result<DataUri, Error>),
    /// Escape closes the capture overlay, then the drawer.
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (profile photo location).
    /// Takes precedence over `ICED_DECK_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_DECK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
