// SPDX-License-Identifier: MPL-2.0
//! Preference persistence logic.
//!
//! Applies a language selection to the running application and writes it to
//! the preference file so the choice survives restarts.

use super::Message;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::store::{Action, Store};
use iced::Task;
use unic_langid::LanguageIdentifier;

/// Applies the newly selected locale to the localization layer and the
/// store, then persists it to config.
pub fn apply_language_change(
    i18n: &mut I18n,
    store: &mut Store,
    locale: LanguageIdentifier,
) -> Task<Message> {
    i18n.set_locale(locale.clone());
    store.dispatch(Action::SetLanguage(locale.to_string()));

    let mut cfg = config::load().unwrap_or_default();
    cfg.language = Some(locale.to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}
