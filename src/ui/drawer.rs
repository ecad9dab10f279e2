// SPDX-License-Identifier: MPL-2.0
//! Side navigation drawer.
//!
//! The header shows the profile photo with a camera toggle; below it sit the
//! navigation items for the top-level screens. The drawer stays open while
//! the capture overlay is up, matching the stacking order of the layout.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::avatar;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, image, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the drawer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
    /// Decoded capture, or `None` to render the placeholder avatar.
    pub photo: Option<&'a image::Handle>,
}

/// Messages emitted by the drawer.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    ToggleCamera,
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Screen),
    ToggleCamera,
    Close,
}

/// Process a drawer message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
        Message::ToggleCamera => Event::ToggleCamera,
        Message::Close => Event::Close,
    }
}

/// Render the drawer panel.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = build_header(&ctx);

    let items = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::XS)
        .push(build_item(ctx.i18n, "drawer-home", Screen::Home, ctx.active))
        .push(build_item(
            ctx.i18n,
            "drawer-profile",
            Screen::Profile,
            ctx.active,
        ))
        .push(build_item(ctx.i18n, "drawer-about", Screen::About, ctx.active));

    Container::new(Column::new().push(header).push(items))
        .width(sizing::DRAWER_WIDTH)
        .height(Length::Fill)
        .style(styles::drawer_panel)
        .into()
}

/// Build the header with the avatar and the camera toggle.
fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let photo_button = button(avatar::view(ctx.photo, sizing::AVATAR_SM))
        .on_press(Message::ToggleCamera)
        .padding(0)
        .style(button::text);

    let caption = Text::new(ctx.i18n.tr("profile-change-photo")).size(typography::CAPTION);

    let column = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(photo_button)
        .push(caption);

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .style(styles::drawer_header)
        .into()
}

/// Build a single navigation item.
fn build_item<'a>(
    i18n: &'a I18n,
    key: &'static str,
    target: Screen,
    active: Screen,
) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(key)).size(typography::BODY);
    let style: fn(&iced::Theme, button::Status) -> button::Style = if target == active {
        styles::drawer_item_active
    } else {
        styles::drawer_item
    };

    button(label)
        .on_press(Message::Navigate(target))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_emits_navigate_event() {
        let event = update(Message::Navigate(Screen::Profile));
        assert!(matches!(event, Event::Navigate(Screen::Profile)));
    }

    #[test]
    fn toggle_camera_emits_event() {
        let event = update(Message::ToggleCamera);
        assert!(matches!(event, Event::ToggleCamera));
    }

    #[test]
    fn drawer_view_renders_with_placeholder() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            active: Screen::Home,
            photo: None,
        });
    }

    #[test]
    fn drawer_view_renders_with_photo() {
        let i18n = I18n::default();
        let handle = image::Handle::from_rgba(1, 1, vec![255_u8; 4]);
        let _element = view(ViewContext {
            i18n: &i18n,
            active: Screen::Profile,
            photo: Some(&handle),
        });
    }
}
