use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Every message key the UI renders.
///
/// Locales are checked against this list while bundles are built; a locale
/// missing any of these keys is dropped with a warning instead of producing
/// `MISSING:` artifacts in the rendered UI.
pub const REQUIRED_MESSAGES: &[&str] = &[
    "window-title",
    "drawer-home",
    "drawer-profile",
    "drawer-about",
    "tab-search",
    "tab-fav",
    "tab-setting",
    "search-title",
    "search-input-placeholder",
    "search-empty-hint",
    "fav-title",
    "fav-empty-hint",
    "setting-title",
    "setting-language-label",
    "language-name-en",
    "language-name-fr",
    "profile-title",
    "profile-change-photo",
    "camera-title",
    "camera-hint",
    "camera-pick-button",
    "camera-close-button",
    "about-title",
    "about-description",
    "about-version-label",
    "about-back-button",
];

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl I18n {
    pub fn new() -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                        let res = FluentResource::try_new(source)
                            .expect("Failed to parse FTL file.");
                        let mut bundle = FluentBundle::new(vec![locale.clone()]);
                        bundle.add_resource(res).expect("Failed to add resource.");

                        if validate_bundle(&locale, &bundle) {
                            bundles.insert(locale.clone(), bundle);
                            available_locales.push(locale);
                        }
                    }
                }
            }
        }

        available_locales.sort_by_key(|locale| locale.to_string());

        let current_locale: LanguageIdentifier = "en".parse().unwrap();

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches the active locale. A locale without a loaded bundle is
    /// ignored, leaving the current one in place.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Applies a raw language code coming from the store or a preference
    /// file. Tries an exact match first, then any available locale sharing
    /// the primary language subtag (so `fr-CA` still lands on `fr`).
    pub fn set_locale_str(&mut self, code: &str) {
        let Ok(requested) = code.parse::<LanguageIdentifier>() else {
            return;
        };
        if self.bundles.contains_key(&requested) {
            self.current_locale = requested;
            return;
        }
        if let Some(fallback) = self
            .available_locales
            .iter()
            .find(|locale| locale.language == requested.language)
        {
            self.current_locale = fallback.clone();
        }
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn validate_bundle(locale: &LanguageIdentifier, bundle: &FluentBundle<FluentResource>) -> bool {
    let missing: Vec<&str> = REQUIRED_MESSAGES
        .iter()
        .copied()
        .filter(|key| {
            bundle
                .get_message(key)
                .and_then(|message| message.value())
                .is_none()
        })
        .collect();

    if missing.is_empty() {
        return true;
    }
    eprintln!(
        "Dropping locale {}: missing message(s) {:?}",
        locale, missing
    );
    false
}
