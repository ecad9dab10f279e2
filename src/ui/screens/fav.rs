// SPDX-License-Identifier: MPL-2.0
//! Favourites tab. The shell ships the localized empty state only.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{Column, Text},
    Element, Length,
};

/// Render the favourites screen.
pub fn view<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("fav-title")).size(typography::TITLE_LG);
    let hint = Text::new(i18n.tr("fav-empty-hint")).size(typography::BODY);

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(title)
        .push(hint)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fav_view_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(&i18n);
    }
}
