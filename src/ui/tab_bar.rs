// SPDX-License-Identifier: MPL-2.0
//! Bottom tab bar shown on the Home screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Tabs hosted by the Home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Search,
    Fav,
    Setting,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Search, Tab::Fav, Tab::Setting];

    /// Localization key for the tab label.
    pub fn title_key(self) -> &'static str {
        match self {
            Tab::Search => "tab-search",
            Tab::Fav => "tab-fav",
            Tab::Setting => "tab-setting",
        }
    }
}

/// Contextual data needed to render the tab bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Tab,
}

/// Messages emitted by the tab bar.
#[derive(Debug, Clone)]
pub enum Message {
    Selected(Tab),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Selected(Tab),
}

/// Process a tab bar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Selected(tab) => Event::Selected(tab),
    }
}

/// Render the tab bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut row = Row::new().width(Length::Fill).height(Length::Fill);
    for tab in Tab::ALL {
        let label = Container::new(Text::new(ctx.i18n.tr(tab.title_key())).size(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        let tab_button = button(label)
            .on_press(Message::Selected(tab))
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .style(styles::tab_button(tab == ctx.active));

        row = row.push(tab_button);
    }

    Container::new(row)
        .width(Length::Fill)
        .height(sizing::TAB_BAR_HEIGHT)
        .style(styles::tab_bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_emits_event_with_tab() {
        let event = update(Message::Selected(Tab::Setting));
        assert!(matches!(event, Event::Selected(Tab::Setting)));
    }

    #[test]
    fn all_lists_tabs_in_display_order() {
        assert_eq!(Tab::ALL, [Tab::Search, Tab::Fav, Tab::Setting]);
    }

    #[test]
    fn default_tab_is_search() {
        assert_eq!(Tab::default(), Tab::Search);
    }

    #[test]
    fn tab_bar_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            active: Tab::Fav,
        });
    }
}
