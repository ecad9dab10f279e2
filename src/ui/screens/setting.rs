// SPDX-License-Identifier: MPL-2.0
//! Setting tab providing the language selection submenu.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, Button, Column, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the setting screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the setting screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    LanguageSelected(LanguageIdentifier),
}

/// Process a setting message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
    }
}

/// Render the setting screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("setting-title")).size(typography::TITLE_LG);

    let mut language_column = Column::new()
        .push(Text::new(ctx.i18n.tr("setting-language-label")))
        .spacing(spacing::XS);

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated language name, e.g. "language-name-fr".
        let translated_name = ctx.i18n.tr(&format!("language-name-{}", locale));
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let mut language_button = Button::new(Text::new(button_text))
            .on_press(Message::LanguageSelected(locale.clone()));

        if ctx.i18n.current_locale() == locale {
            language_button = language_button.style(button::primary);
        } else {
            language_button = language_button.style(button::secondary);
        }

        language_column = language_column.push(language_button);
    }

    Column::new()
        .push(title)
        .push(language_column)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_selected_emits_event() {
        let locale: LanguageIdentifier = "fr".parse().unwrap();
        let event = update(Message::LanguageSelected(locale.clone()));
        assert!(matches!(event, Event::LanguageSelected(l) if l == locale));
    }

    #[test]
    fn setting_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
