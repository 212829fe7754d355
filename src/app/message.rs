// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::message::MessageType;
use crate::ui::notifications::{AnimationKind, NotificationMessage, Placement};
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(NotificationMessage),
    /// Shows a timed message of the given type.
    Show(MessageType),
    /// Shows, or closes, the message that never times out.
    TogglePersistent,
    /// Shows a loading message that is later replaced in place.
    StartLoading,
    LoadingFinished,
    DestroyAll,
    PlacementSelected(Placement),
    AnimationSelected(AnimationKind),
    CycleTheme,
    /// A timed message left the screen; `false` if its group went away first.
    Settled(MessageType, bool),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    pub placement: Option<Placement>,
    pub animation: Option<AnimationKind>,
    pub theme: Option<ThemeMode>,
}
