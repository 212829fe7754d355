// SPDX-License-Identifier: MPL-2.0
//! Demo application showing every message type on top of a small control panel.
//!
//! The `App` struct wires together localization, theming and one shared
//! [`MessageApi`], and translates button presses into message calls. Timed
//! messages hand back a settle future that is turned into a [`Task`] so the
//! update loop learns when they leave the screen.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::I18n;
use crate::message::{
    Content, DismissHandle, Dismissal, GlobalConfig, MessageApi, MessageConfig, MessageType,
};
use crate::ui::notifications::{AnimationKind, Placement};
use crate::ui::theming::{ThemeMode, ThemeProvider};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;
pub const MIN_WINDOW_WIDTH: f32 = 600.0;

/// Key shared by the loading message and the success message replacing it.
const LOADING_KEY: &str = "demo-loading";
const PERSISTENT_KEY: &str = "demo-persistent";
const LOADING_DELAY: Duration = Duration::from_millis(1_500);
const DIAGNOSTICS_CAPACITY: usize = 200;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: ThemeProvider,
    messages: MessageApi,
    diagnostics: DiagnosticsCollector,
    placement: Placement,
    animation: AnimationKind,
    persistent: Option<DismissHandle>,
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("placement", &self.placement)
            .field("animation", &self.animation)
            .field("messages", &self.messages.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default settings");
            Config::default()
        });
        (
            Self::with_config(flags, &config, config::settings_path()),
            Task::none(),
        )
    }

    /// Builds the application from already loaded settings. Theme changes are
    /// written to `settings_path` when one is given.
    pub fn with_config(flags: Flags, config: &Config, settings_path: Option<PathBuf>) -> Self {
        let i18n = I18n::new(flags.lang, config);
        let mode = flags.theme.unwrap_or(config.theme_mode);
        let theme = match settings_path {
            Some(path) => ThemeProvider::persisted(mode, path),
            None => ThemeProvider::new(mode),
        };

        let messages = MessageApi::from_config(config);
        messages.config(GlobalConfig {
            placement: flags.placement,
            animation: flags.animation,
            ..GlobalConfig::default()
        });

        let diagnostics = DiagnosticsCollector::new(DIAGNOSTICS_CAPACITY);
        let (placement, animation) = messages.with_manager(|manager| {
            manager.set_diagnostics(diagnostics.handle());
            manager.resize(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));
            (manager.options().placement, manager.options().animation)
        });

        Self {
            i18n,
            theme,
            messages,
            diagnostics,
            placement,
            animation,
            persistent: None,
            now: Instant::now(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(&self.messages),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Notification(notification) => {
                self.messages.update(&notification);
                self.diagnostics.process_pending();
                Task::none()
            }
            Message::Show(kind) => {
                let content = Content::localized(match kind {
                    MessageType::Success => "message-success",
                    MessageType::Error => "message-error",
                    MessageType::Warning => "message-warning",
                    MessageType::Info | MessageType::Loading => "message-info",
                });
                settle_task(kind, self.messages.open(MessageConfig::new(content).kind(kind)))
            }
            Message::TogglePersistent => {
                self.toggle_persistent();
                Task::none()
            }
            Message::StartLoading => {
                self.messages.loading(
                    MessageConfig::new(Content::localized("message-loading")).key(LOADING_KEY),
                );
                Task::perform(
                    async { tokio::time::sleep(LOADING_DELAY).await },
                    |()| Message::LoadingFinished,
                )
            }
            Message::LoadingFinished => {
                let content = Content::localized("message-loaded").with_arg("count", "42");
                settle_task(
                    MessageType::Success,
                    self.messages
                        .success(MessageConfig::new(content).key(LOADING_KEY)),
                )
            }
            Message::DestroyAll => {
                self.messages.destroy(None);
                self.persistent = None;
                Task::none()
            }
            Message::PlacementSelected(placement) => {
                self.placement = placement;
                self.messages.config(GlobalConfig {
                    placement: Some(placement),
                    ..GlobalConfig::default()
                });
                Task::none()
            }
            Message::AnimationSelected(animation) => {
                self.animation = animation;
                self.messages.config(GlobalConfig {
                    animation: Some(animation),
                    ..GlobalConfig::default()
                });
                Task::none()
            }
            Message::CycleTheme => {
                let next = match self.theme.mode() {
                    ThemeMode::Light => ThemeMode::Dark,
                    ThemeMode::Dark => ThemeMode::System,
                    ThemeMode::System => ThemeMode::Light,
                };
                if let Err(err) = self.theme.set_mode(next) {
                    tracing::warn!(%err, "could not switch theme");
                }
                Task::none()
            }
            Message::Settled(kind, settled) => {
                tracing::info!(kind = kind.name(), settled, "message left the screen");
                Task::none()
            }
        };

        self.now = Instant::now();
        task
    }

    fn toggle_persistent(&mut self) {
        let live = self.persistent.take().filter(|handle| {
            self.messages
                .with_manager(|manager| manager.get(handle.key()).is_some())
        });

        match live {
            Some(handle) => {
                handle.dismiss();
                let content = Content::localized("message-dismissed")
                    .with_arg("key", handle.key().to_string());
                self.messages.info(content);
            }
            None => {
                let content = MessageConfig::new(Content::localized("message-persistent"))
                    .key(PERSISTENT_KEY)
                    .duration(Duration::ZERO);
                self.persistent = self.messages.info(content).handle();
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: self.theme.colors(),
            messages: &self.messages,
            placement: self.placement,
            animation: self.animation,
            event_count: self.diagnostics.len(),
            now: self.now,
        })
    }
}

/// Reports when a timed message has gone; persistent ones need no task.
fn settle_task(kind: MessageType, dismissal: Dismissal) -> Task<Message> {
    match dismissal.settle() {
        Some(settle) => Task::perform(settle, move |settled| Message::Settled(kind, settled)),
        None => Task::none(),
    }
}
