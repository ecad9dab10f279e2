// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only keyboard dismissal is routed from native events: Escape closes the
//! capture overlay if it is up, otherwise the drawer.

use super::Message;
use iced::{event, keyboard, Subscription};

/// Creates the application event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) = &event
        {
            return match status {
                event::Status::Ignored => Some(Message::EscapePressed),
                event::Status::Captured => None,
            };
        }
        None
    })
}
