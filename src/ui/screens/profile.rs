// SPDX-License-Identifier: MPL-2.0
//! Profile screen showing the photo large, with the capture toggle.

use crate::i18n::fluent::I18n;
use crate::ui::avatar;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, image, Column, Text},
    Element, Length,
};

/// Contextual data needed to render the profile screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Decoded capture, or `None` to render the placeholder avatar.
    pub photo: Option<&'a image::Handle>,
}

/// Messages emitted by the profile screen.
#[derive(Debug, Clone)]
pub enum Message {
    ChangePhoto,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ChangePhoto,
}

/// Process a profile message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ChangePhoto => Event::ChangePhoto,
    }
}

/// Render the profile screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("profile-title")).size(typography::TITLE_LG);
    let photo = avatar::view(ctx.photo, sizing::AVATAR_LG);
    let change_button = button(Text::new(ctx.i18n.tr("profile-change-photo")))
        .on_press(Message::ChangePhoto)
        .style(button::primary);

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(title)
        .push(photo)
        .push(change_button)
        .into()
}
