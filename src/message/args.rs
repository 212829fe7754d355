// SPDX-License-Identifier: MPL-2.0
//! Arguments accepted by the message API.

use crate::config::{MessageSettings, MAX_MESSAGE_DURATION_SECS};
use crate::ui::notifications::{
    AnimationKind, Content, Icon, Key, MessageType, OptionsPatch, Placement, Style,
};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Full description of one message.
pub struct MessageConfig {
    pub content: Content,
    /// Overrides the global default. Zero keeps the message until dismissed.
    pub duration: Option<Duration>,
    pub key: Option<Key>,
    pub style: Style,
    pub icon: Icon,
    /// Message type used by `open`; the typed methods ignore it.
    pub kind: Option<MessageType>,
    pub closable: bool,
    pub on_close: Option<Box<dyn FnOnce()>>,
    pub on_click: Option<Rc<dyn Fn()>>,
}

impl MessageConfig {
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            duration: None,
            key: None,
            style: Style::default(),
            icon: Icon::Type,
            kind: None,
            closable: true,
            on_close: None,
            on_click: None,
        }
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: MessageType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    #[must_use]
    pub fn on_close(mut self, on_close: impl FnOnce() + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    #[must_use]
    pub fn on_click(mut self, on_click: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }
}

impl fmt::Debug for MessageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageConfig")
            .field("content", &self.content)
            .field("duration", &self.duration)
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("closable", &self.closable)
            .finish_non_exhaustive()
    }
}

/// Either bare content (all defaults) or a full [`MessageConfig`].
#[derive(Debug)]
pub enum MessageArgs {
    Content(Content),
    Config(MessageConfig),
}

impl MessageArgs {
    pub(crate) fn into_config(self) -> MessageConfig {
        match self {
            MessageArgs::Content(content) => MessageConfig::new(content),
            MessageArgs::Config(config) => config,
        }
    }
}

impl From<&str> for MessageArgs {
    fn from(text: &str) -> Self {
        MessageArgs::Content(text.into())
    }
}

impl From<String> for MessageArgs {
    fn from(text: String) -> Self {
        MessageArgs::Content(text.into())
    }
}

impl From<Content> for MessageArgs {
    fn from(content: Content) -> Self {
        MessageArgs::Content(content)
    }
}

impl From<MessageConfig> for MessageArgs {
    fn from(config: MessageConfig) -> Self {
        MessageArgs::Config(config)
    }
}

/// Global defaults applied with [`MessageApi::config`](super::MessageApi::config).
///
/// `duration` stays with the message API; everything else configures the
/// underlying notification manager.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalConfig {
    pub duration: Option<Duration>,
    pub max_count: Option<usize>,
    pub prefix_cls: Option<String>,
    /// Distance of the first message from the anchored edge.
    pub top: Option<f32>,
    pub rtl: Option<bool>,
    pub placement: Option<Placement>,
    pub animation: Option<AnimationKind>,
}

impl GlobalConfig {
    /// Reads the `[message]` table of the settings file.
    #[must_use]
    pub fn from_settings(settings: &MessageSettings) -> Self {
        Self {
            duration: settings.duration_secs.map(seconds),
            max_count: settings.max_count,
            top: settings.top,
            placement: settings.placement,
            animation: settings.animation,
            ..Self::default()
        }
    }

    /// Separates the facade's default duration from the manager options.
    pub(crate) fn split(self) -> (Option<Duration>, OptionsPatch) {
        let patch = OptionsPatch {
            max_count: self.max_count,
            placement: self.placement,
            animation: self.animation,
            prefix_cls: self.prefix_cls,
            style: self.top.map(Style::top),
            rtl: self.rtl,
            ..OptionsPatch::default()
        };
        (self.duration, patch)
    }
}

/// Converts a configured number of seconds, clamping garbage to a valid range.
pub(crate) fn seconds(secs: f32) -> Duration {
    if secs.is_finite() {
        Duration::from_secs_f32(secs.clamp(0.0, MAX_MESSAGE_DURATION_SECS))
    } else {
        Duration::ZERO
    }
}

/// Caps a requested auto-dismiss duration.
pub(crate) fn clamped(duration: Duration) -> Duration {
    duration.min(Duration::from_secs_f32(MAX_MESSAGE_DURATION_SECS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_content_uses_defaults() {
        let config = MessageArgs::from("hello").into_config();
        assert_eq!(config.content, Content::Text("hello".into()));
        assert!(config.duration.is_none());
        assert!(config.key.is_none());
        assert!(config.closable);
    }

    #[test]
    fn split_routes_top_to_style() {
        let (duration, patch) = GlobalConfig {
            duration: Some(Duration::from_secs(5)),
            max_count: Some(3),
            top: Some(24.0),
            ..GlobalConfig::default()
        }
        .split();

        assert_eq!(duration, Some(Duration::from_secs(5)));
        assert_eq!(patch.max_count, Some(3));
        assert_eq!(patch.style.and_then(|style| style.top), Some(24.0));
        assert!(patch.placement.is_none());
    }

    #[test]
    fn settings_seconds_are_clamped() {
        let settings = MessageSettings {
            duration_secs: Some(-4.0),
            ..MessageSettings::default()
        };
        assert_eq!(
            GlobalConfig::from_settings(&settings).duration,
            Some(Duration::ZERO)
        );
        assert_eq!(seconds(f32::NAN), Duration::ZERO);
        assert_eq!(seconds(1.5), Duration::from_millis(1500));
    }
}
