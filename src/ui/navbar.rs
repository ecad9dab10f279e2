// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar with the drawer toggle and current screen title.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleDrawer,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ToggleDrawer,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ToggleDrawer => Event::ToggleDrawer,
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let menu_button = button(Text::new("☰").size(typography::TITLE_MD))
        .on_press(Message::ToggleDrawer)
        .padding(spacing::XS)
        .style(button::text);

    let title_key = match ctx.screen {
        Screen::Home => "drawer-home",
        Screen::Profile => "drawer-profile",
        Screen::About => "drawer-about",
    };
    let title = Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_MD);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(title);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_drawer_emits_event() {
        let event = update(Message::ToggleDrawer);
        assert!(matches!(event, Event::ToggleDrawer));
    }

    #[test]
    fn navbar_view_renders_for_each_screen() {
        let i18n = I18n::default();
        for screen in [Screen::Home, Screen::Profile, Screen::About] {
            let _element = view(ViewContext {
                i18n: &i18n,
                screen,
            });
        }
    }
}
