// SPDX-License-Identifier: MPL-2.0
//! About screen displaying application information.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Row, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Back,
}

/// Process an about message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Back => Event::Back,
    }
}

/// Render the about screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);
    let description = Text::new(ctx.i18n.tr("about-description")).size(typography::BODY);

    let version = Row::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("about-version-label")).size(typography::CAPTION))
        .push(Text::new(APP_VERSION).size(typography::CAPTION));

    let back_button = button(Text::new(format!("← {}", ctx.i18n.tr("about-back-button"))))
        .on_press(Message::Back);

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(title)
        .push(description)
        .push(version)
        .push(back_button)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_emits_event() {
        let event = update(&Message::Back);
        assert!(matches!(event, Event::Back));
    }

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
