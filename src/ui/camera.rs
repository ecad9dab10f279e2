// SPDX-License-Identifier: MPL-2.0
//! Capture overlay stacked over the whole UI while `show_camera` is set.
//!
//! The overlay itself only emits intents; opening the picker dialog and the
//! subsequent save run as tasks in the application root, so closing the
//! overlay never waits on the file system.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the capture overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the capture overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Pick,
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    PickRequested,
    Close,
}

/// Process a capture overlay message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Pick => Event::PickRequested,
        Message::Close => Event::Close,
    }
}

/// Render the capture overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("camera-title")).size(typography::TITLE_MD);
    let hint = Text::new(ctx.i18n.tr("camera-hint")).size(typography::BODY);

    let pick_button = button(Text::new(ctx.i18n.tr("camera-pick-button")))
        .on_press(Message::Pick)
        .style(button::primary);
    let close_button = button(Text::new(ctx.i18n.tr("camera-close-button")))
        .on_press(Message::Close)
        .style(button::secondary);

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(pick_button)
        .push(close_button);

    let panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(title)
            .push(hint)
            .push(buttons),
    )
    .width(sizing::CAMERA_PANEL_WIDTH)
    .padding(spacing::LG)
    .style(styles::overlay_panel);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::backdrop)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_emits_pick_requested() {
        let event = update(&Message::Pick);
        assert!(matches!(event, Event::PickRequested));
    }

    #[test]
    fn close_emits_close() {
        let event = update(&Message::Close);
        assert!(matches!(event, Event::Close));
    }

    #[test]
    fn camera_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
