// SPDX-License-Identifier: MPL-2.0
//! Payload carried by a notice: message type, icon and text.

use crate::i18n::I18n;
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::widget::svg::{Handle, Svg};
use iced::Color;

/// Semantic category of a message. Selects the accent color and default icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageType {
    Success,
    Error,
    #[default]
    Info,
    Warning,
    Loading,
}

impl MessageType {
    #[must_use]
    pub fn color(self, scheme: &ColorScheme) -> Color {
        match self {
            MessageType::Success => scheme.success,
            MessageType::Error => scheme.error,
            MessageType::Info => scheme.info,
            MessageType::Warning => scheme.warning,
            MessageType::Loading => scheme.brand_primary,
        }
    }

    #[must_use]
    pub fn icon(self) -> Svg<'static> {
        match self {
            MessageType::Success => icons::check_circle(),
            MessageType::Error => icons::close_circle(),
            MessageType::Info => icons::info_circle(),
            MessageType::Warning => icons::warning(),
            MessageType::Loading => icons::loading(),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MessageType::Success => "success",
            MessageType::Error => "error",
            MessageType::Info => "info",
            MessageType::Warning => "warning",
            MessageType::Loading => "loading",
        }
    }
}

/// Icon shown in front of the text.
#[derive(Debug, Clone, Default)]
pub enum Icon {
    /// The message type's own icon.
    #[default]
    Type,
    Custom(Handle),
    Hidden,
}

/// Text of a notice, either literal or looked up at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Localized {
        key: String,
        args: Vec<(String, String)>,
    },
}

impl Content {
    pub fn localized(key: impl Into<String>) -> Self {
        Content::Localized {
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// Adds a placeholder value. Literal text is returned unchanged.
    #[must_use]
    pub fn with_arg(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            Content::Localized { key, mut args } => {
                args.push((name.into(), value.into()));
                Content::Localized { key, args }
            }
            text @ Content::Text(_) => text,
        }
    }

    /// Text to display in the current locale.
    #[must_use]
    pub fn resolve(&self, i18n: &I18n) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Localized { key, args } if args.is_empty() => i18n.tr(key),
            Content::Localized { key, args } => {
                let args: Vec<(&str, &str)> = args
                    .iter()
                    .map(|(name, value)| (name.as_str(), value.as_str()))
                    .collect();
                i18n.tr_with_args(key, &args)
            }
        }
    }

    /// Rough character count used for size estimates before a real measurement.
    #[must_use]
    pub fn approximate_len(&self) -> usize {
        match self {
            Content::Text(text) => text.chars().count(),
            Content::Localized { key, args } => {
                key.chars().count() + args.iter().map(|(_, v)| v.chars().count()).sum::<usize>()
            }
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_owned())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

/// Decorated payload rendered by a toast.
#[derive(Debug, Clone, Default)]
pub struct NoticeContent {
    pub kind: MessageType,
    pub icon: Icon,
    pub body: Content,
}

impl NoticeContent {
    pub fn new(kind: MessageType, body: impl Into<Content>) -> Self {
        Self {
            kind,
            icon: Icon::Type,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    /// Icon widget to render, if any.
    #[must_use]
    pub fn icon_widget(&self) -> Option<Svg<'static>> {
        match &self.icon {
            Icon::Type => Some(self.kind.icon()),
            Icon::Custom(handle) => Some(Svg::new(handle.clone())),
            Icon::Hidden => None,
        }
    }
}

impl From<&str> for NoticeContent {
    fn from(text: &str) -> Self {
        NoticeContent::new(MessageType::Info, text)
    }
}

impl From<String> for NoticeContent {
    fn from(text: String) -> Self {
        NoticeContent::new(MessageType::Info, text)
    }
}
