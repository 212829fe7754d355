// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::message::MessageApi;
use crate::ui::notifications::NotificationMessage;
use iced::{event, window, Subscription};

/// Forwards window resizes so notices stay anchored to the viewport edges.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            return Some(Message::Notification(NotificationMessage::Resized(size)));
        }
        None
    })
}

/// Animation and dismiss clock, active only while messages need it.
pub fn create_tick_subscription(messages: &MessageApi) -> Subscription<Message> {
    messages.subscription().map(Message::Notification)
}
