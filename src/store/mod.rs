// SPDX-License-Identifier: MPL-2.0
//! Shared UI state and its dispatch interface.
//!
//! The [`Store`] is the single owner of [`UiState`]; the rest of the
//! application reads snapshots through [`Store::state`] and requests changes
//! by dispatching an [`Action`]. Transitions run synchronously on the event
//! loop, so dispatch order is the only ordering that matters.

use crate::photo::DataUri;

/// Language code used before a persisted preference has been loaded.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Reference to the image shown in the profile slots (drawer header and
/// profile screen).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProfilePhoto {
    /// Built-in avatar shown until a photo has been captured.
    #[default]
    Placeholder,
    /// A captured photo, carried inline as a base64 data URI.
    Uri(DataUri),
}

impl ProfilePhoto {
    /// Returns the data URI if a captured photo is set.
    pub fn uri(&self) -> Option<&DataUri> {
        match self {
            ProfilePhoto::Placeholder => None,
            ProfilePhoto::Uri(uri) => Some(uri),
        }
    }
}

/// Snapshot of the shared UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Active language code. Not validated here; unknown codes surface as a
    /// locale miss in the localization layer, never as a dispatch failure.
    pub language: String,
    pub profile_photo: ProfilePhoto,
    /// Whether the capture overlay is stacked over the UI.
    pub show_camera: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            profile_photo: ProfilePhoto::Placeholder,
            show_camera: false,
        }
    }
}

/// State transition requests.
///
/// Each variant replaces exactly one field wholesale; no variant can fail or
/// partially apply.
#[derive(Debug, Clone)]
pub enum Action {
    SetLanguage(String),
    SetProfilePhoto(ProfilePhoto),
    ShowCamera(bool),
}

/// Pure reducer mapping the current state and an action to the next state.
pub fn reduce(mut state: UiState, action: &Action) -> UiState {
    match action {
        Action::SetLanguage(code) => state.language = code.clone(),
        Action::SetProfilePhoto(photo) => state.profile_photo = photo.clone(),
        Action::ShowCamera(visible) => state.show_camera = *visible,
    }
    state
}

/// Single owner of [`UiState`].
///
/// Exactly one instance exists per running application, held by the `App`
/// root; there is no global access path.
#[derive(Debug, Default)]
pub struct Store {
    state: UiState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `action` through the reducer, replacing the held state.
    pub fn dispatch(&mut self, action: Action) {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, &action);
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &UiState {
        &self.state
    }
}
