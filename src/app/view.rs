// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navigation chrome around the active screen, then stacks the
//! drawer and the capture overlay on top as needed.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::store::UiState;
use crate::ui::camera;
use crate::ui::drawer;
use crate::ui::navbar;
use crate::ui::screens::{about, fav, profile, search, setting};
use crate::ui::styles;
use crate::ui::tab_bar::{self, Tab};
use iced::widget::{image, mouse_area, Column, Container, Row, Space, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a UiState,
    pub screen: Screen,
    pub active_tab: Tab,
    pub drawer_open: bool,
    pub search: &'a search::State,
    pub photo_handle: Option<&'a image::Handle>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
    })
    .map(Message::Navbar);

    let content: Element<'_, Message> = match ctx.screen {
        Screen::Home => view_home(&ctx),
        Screen::Profile => profile::view(profile::ViewContext {
            i18n: ctx.i18n,
            photo: ctx.photo_handle,
        })
        .map(Message::Profile),
        Screen::About => about::view(about::ViewContext { i18n: ctx.i18n }).map(Message::About),
    };

    let base: Element<'_, Message> = Column::new()
        .push(navbar)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into();

    let mut layers = Stack::new().push(base);
    if ctx.drawer_open {
        layers = layers.push(view_drawer(&ctx));
    }
    if ctx.state.show_camera {
        layers = layers.push(camera::view(camera::ViewContext { i18n: ctx.i18n }).map(Message::Camera));
    }
    layers.into()
}

/// Home screen: the active tab's content over the bottom tab bar.
fn view_home<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tab_content: Element<'a, Message> = match ctx.active_tab {
        Tab::Search => search::view(ctx.i18n, ctx.search).map(Message::Search),
        Tab::Fav => fav::view(ctx.i18n),
        Tab::Setting => setting::view(setting::ViewContext { i18n: ctx.i18n }).map(Message::Setting),
    };

    let bar = tab_bar::view(tab_bar::ViewContext {
        i18n: ctx.i18n,
        active: ctx.active_tab,
    })
    .map(Message::TabBar);

    Column::new()
        .push(
            Container::new(tab_content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(bar)
        .into()
}

/// Drawer layer: the panel on the left, a click-away backdrop on the right.
fn view_drawer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let panel = drawer::view(drawer::ViewContext {
        i18n: ctx.i18n,
        active: ctx.screen,
        photo: ctx.photo_handle,
    })
    .map(Message::Drawer);

    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::backdrop),
    )
    .on_press(Message::Drawer(drawer::Message::Close));

    Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(panel)
        .push(backdrop)
        .into()
}
