// SPDX-License-Identifier: MPL-2.0
//! Search tab: a query input over an empty-results surface.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{text_input, Column, Text},
    Element, Length,
};

/// Local state for the search screen.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub query: String,
    /// Last submitted query, shown with the empty-results hint.
    pub submitted: Option<String>,
}

/// Messages emitted by the search screen.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submitted,
}

/// Process a search message against the local state.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::QueryChanged(query) => state.query = query,
        Message::Submitted => {
            let trimmed = state.query.trim();
            if !trimmed.is_empty() {
                state.submitted = Some(trimmed.to_string());
            }
        }
    }
}

/// Render the search screen.
pub fn view<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("search-title")).size(typography::TITLE_LG);

    let input = text_input(&i18n.tr("search-input-placeholder"), &state.query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::Submitted)
        .padding(spacing::SM);

    let hint = match &state.submitted {
        Some(query) => Text::new(format!("{} ({})", i18n.tr("search-empty-hint"), query)),
        None => Text::new(i18n.tr("search-empty-hint")),
    }
    .size(typography::BODY);

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(title)
        .push(input)
        .push(hint)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_changed_updates_state() {
        let mut state = State::default();
        update(&mut state, Message::QueryChanged("hello".into()));
        assert_eq!(state.query, "hello");
        assert!(state.submitted.is_none());
    }

    #[test]
    fn submit_records_trimmed_query() {
        let mut state = State::default();
        update(&mut state, Message::QueryChanged("  hello  ".into()));
        update(&mut state, Message::Submitted);
        assert_eq!(state.submitted.as_deref(), Some("hello"));
    }

    #[test]
    fn submit_ignores_blank_query() {
        let mut state = State::default();
        update(&mut state, Message::QueryChanged("   ".into()));
        update(&mut state, Message::Submitted);
        assert!(state.submitted.is_none());
    }

    #[test]
    fn search_view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let _element = view(&i18n, &state);
    }
}
