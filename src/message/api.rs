// SPDX-License-Identifier: MPL-2.0
//! Shared message handle, dismiss handles and settle futures.

use super::args::{clamped, seconds, GlobalConfig, MessageArgs, MessageConfig};
use crate::config::{Config, DEFAULT_MESSAGE_DURATION_SECS};
use crate::i18n::I18n;
use crate::ui::notifications::{
    Key, Manager, MessageType, NoticeContent, NoticeProps, NotificationMessage, Options, Toast,
};
use crate::ui::theming::ColorScheme;
use iced::{Element, Subscription};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};
use std::task::{Context, Poll};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

type Callback = Box<dyn FnOnce()>;

struct Shared {
    manager: Manager,
    duration: Duration,
}

/// Caller callbacks run after the manager borrow is released, so they may
/// call back into the API.
type Pending = Rc<RefCell<VecDeque<Callback>>>;

/// Handle to one message group.
///
/// Clones share the same notices and configuration.
#[derive(Clone)]
pub struct MessageApi {
    shared: Rc<RefCell<Shared>>,
    pending: Pending,
}

impl MessageApi {
    #[must_use]
    pub fn new(options: Options, duration: Duration) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                manager: Manager::new(options),
                duration: clamped(duration),
            })),
            pending: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Creates a group from the `[message]` table of the settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let api = Self::default();
        api.config(GlobalConfig::from_settings(&config.message));
        api
    }

    /// Returns a handle sharing this group's state.
    #[must_use]
    pub fn use_message(&self) -> MessageApi {
        self.clone()
    }

    pub fn success(&self, args: impl Into<MessageArgs>) -> Dismissal {
        self.notify(MessageType::Success, args.into().into_config())
    }

    pub fn error(&self, args: impl Into<MessageArgs>) -> Dismissal {
        self.notify(MessageType::Error, args.into().into_config())
    }

    pub fn info(&self, args: impl Into<MessageArgs>) -> Dismissal {
        self.notify(MessageType::Info, args.into().into_config())
    }

    pub fn warning(&self, args: impl Into<MessageArgs>) -> Dismissal {
        self.notify(MessageType::Warning, args.into().into_config())
    }

    /// Alias of [`warning`](Self::warning).
    pub fn warn(&self, args: impl Into<MessageArgs>) -> Dismissal {
        self.warning(args)
    }

    /// Shows a loading message. Always returns a handle keyed by the message
    /// key, so it can be closed or replaced by a later call with that key.
    pub fn loading(&self, args: impl Into<MessageArgs>) -> Dismissal {
        self.notify(MessageType::Loading, args.into().into_config())
    }

    /// Shows a message of the type given in the config (info by default).
    pub fn open(&self, args: impl Into<MessageArgs>) -> Dismissal {
        let config = args.into().into_config();
        let kind = config.kind.unwrap_or_default();
        self.notify(kind, config)
    }

    pub fn success_with(
        &self,
        args: impl Into<MessageArgs>,
        duration: Duration,
        on_close: impl FnOnce() + 'static,
    ) -> Dismissal {
        self.notify_with(MessageType::Success, args, duration, on_close)
    }

    pub fn error_with(
        &self,
        args: impl Into<MessageArgs>,
        duration: Duration,
        on_close: impl FnOnce() + 'static,
    ) -> Dismissal {
        self.notify_with(MessageType::Error, args, duration, on_close)
    }

    pub fn info_with(
        &self,
        args: impl Into<MessageArgs>,
        duration: Duration,
        on_close: impl FnOnce() + 'static,
    ) -> Dismissal {
        self.notify_with(MessageType::Info, args, duration, on_close)
    }

    pub fn warning_with(
        &self,
        args: impl Into<MessageArgs>,
        duration: Duration,
        on_close: impl FnOnce() + 'static,
    ) -> Dismissal {
        self.notify_with(MessageType::Warning, args, duration, on_close)
    }

    pub fn loading_with(
        &self,
        args: impl Into<MessageArgs>,
        duration: Duration,
        on_close: impl FnOnce() + 'static,
    ) -> Dismissal {
        self.notify_with(MessageType::Loading, args, duration, on_close)
    }

    /// Positional form: `duration` and `on_close` override the config.
    fn notify_with(
        &self,
        kind: MessageType,
        args: impl Into<MessageArgs>,
        duration: Duration,
        on_close: impl FnOnce() + 'static,
    ) -> Dismissal {
        let config = args.into().into_config().duration(duration).on_close(on_close);
        self.notify(kind, config)
    }

    fn notify(&self, kind: MessageType, config: MessageConfig) -> Dismissal {
        let dismissal = {
            let mut shared = self.shared.borrow_mut();
            let duration = clamped(config.duration.unwrap_or(shared.duration));
            let key = match config.key {
                Some(key) => key,
                None => shared.manager.generate_key(),
            };

            let (settle, dismissal) = if duration.is_zero() || kind == MessageType::Loading {
                let handle = DismissHandle {
                    shared: Rc::downgrade(&self.shared),
                    key: key.clone(),
                };
                (None, Dismissal::Handle(handle))
            } else {
                let (tx, rx) = oneshot::channel();
                (Some(tx), Dismissal::Settle(SettleFuture { rx }))
            };

            let props = NoticeProps {
                key: Some(key.clone()),
                content: NoticeContent {
                    kind,
                    icon: config.icon,
                    body: config.content,
                },
                duration: Some(duration),
                style: config.style,
                closable: config.closable,
                on_close: config.on_close.map(|on_close| self.deferred(on_close)),
                on_click: config.on_click.map(|on_click| {
                    let pending = Rc::clone(&self.pending);
                    Rc::new(move || {
                        let on_click = Rc::clone(&on_click);
                        pending
                            .borrow_mut()
                            .push_back(Box::new(move || on_click()));
                    }) as Rc<dyn Fn()>
                }),
                settle,
            };

            tracing::debug!(kind = kind.name(), key = %key, ?duration, "message requested");
            shared.manager.add(props, Instant::now());
            dismissal
        };
        self.flush();
        dismissal
    }

    fn deferred(&self, callback: Callback) -> Callback {
        let pending = Rc::clone(&self.pending);
        Box::new(move || pending.borrow_mut().push_back(callback))
    }

    /// Runs queued caller callbacks.
    fn flush(&self) {
        loop {
            let next = self.pending.borrow_mut().pop_front();
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
    }

    /// Applies global defaults. Unset fields are left untouched.
    pub fn config(&self, config: GlobalConfig) {
        let (duration, patch) = config.split();
        {
            let mut shared = self.shared.borrow_mut();
            if let Some(duration) = duration {
                shared.duration = clamped(duration);
            }
            shared.manager.config(patch);
        }
        self.flush();
    }

    /// Closes the message with `key`, or every message.
    pub fn destroy(&self, key: Option<&Key>) {
        self.with_manager(|manager| {
            manager.remove(key, Instant::now());
        });
    }

    /// Default duration of messages without their own.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.shared.borrow().duration
    }

    /// Runs `f` on the underlying manager, then any callbacks it triggered.
    pub fn with_manager<R>(&self, f: impl FnOnce(&mut Manager) -> R) -> R {
        let result = f(&mut self.shared.borrow_mut().manager);
        self.flush();
        result
    }

    /// Forwards a notification message from the host's update loop.
    pub fn update(&self, message: &NotificationMessage) {
        self.with_manager(|manager| manager.handle_message(message));
    }

    /// Overlay with every live message.
    pub fn view<'a>(
        &self,
        i18n: &I18n,
        scheme: &ColorScheme,
        now: Instant,
    ) -> Element<'a, NotificationMessage> {
        Toast::view_overlay(&self.shared.borrow().manager, i18n, scheme, now)
    }

    pub fn subscription(&self) -> Subscription<NotificationMessage> {
        self.shared.borrow().manager.subscription()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.borrow().manager.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.borrow().manager.is_empty()
    }
}

impl Default for MessageApi {
    fn default() -> Self {
        Self::new(Options::default(), seconds(DEFAULT_MESSAGE_DURATION_SECS))
    }
}

impl fmt::Debug for MessageApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shared.try_borrow() {
            Ok(shared) => f
                .debug_struct("MessageApi")
                .field("duration", &shared.duration)
                .field("manager", &shared.manager)
                .finish(),
            Err(_) => f.debug_struct("MessageApi").finish_non_exhaustive(),
        }
    }
}

/// Returns a handle sharing `api`'s state.
#[must_use]
pub fn use_message(api: &MessageApi) -> MessageApi {
    api.use_message()
}

/// What a message call hands back to the caller.
#[derive(Debug)]
pub enum Dismissal {
    /// The message stays until dismissed; the handle closes it.
    Handle(DismissHandle),
    /// The message closes itself; the future resolves once it is gone.
    Settle(SettleFuture),
}

impl Dismissal {
    #[must_use]
    pub fn handle(self) -> Option<DismissHandle> {
        match self {
            Dismissal::Handle(handle) => Some(handle),
            Dismissal::Settle(_) => None,
        }
    }

    #[must_use]
    pub fn settle(self) -> Option<SettleFuture> {
        match self {
            Dismissal::Handle(_) => None,
            Dismissal::Settle(future) => Some(future),
        }
    }

    #[must_use]
    pub fn is_handle(&self) -> bool {
        matches!(self, Dismissal::Handle(_))
    }
}

/// Closes one message by key. Does nothing once the group is gone.
#[derive(Clone)]
pub struct DismissHandle {
    shared: Weak<RefCell<Shared>>,
    key: Key,
}

impl DismissHandle {
    pub fn dismiss(&self) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        match shared.try_borrow_mut() {
            Ok(mut shared) => {
                shared.manager.remove(Some(&self.key), Instant::now());
            }
            Err(_) => {
                tracing::warn!(key = %self.key, "dismiss ignored while the message group is busy");
            }
        };
    }

    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }
}

impl fmt::Debug for DismissHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissHandle")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Resolves to `true` once the message has been removed, or `false` if the
/// message group was dropped first.
#[derive(Debug)]
pub struct SettleFuture {
    rx: oneshot::Receiver<bool>,
}

impl Future for SettleFuture {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|settled| settled.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Phase;
    use crate::config::MAX_MESSAGE_DURATION_SECS;
    use futures_util::FutureExt;
    use std::cell::Cell;

    fn drive(api: &MessageApi, span: Duration) {
        let start = Instant::now();
        let mut now = start;
        while now < start + span {
            now += Duration::from_millis(16);
            api.update(&NotificationMessage::Tick(now));
        }
    }

    #[test]
    fn zero_duration_returns_handle_that_removes() {
        let api = MessageApi::default();
        let handle = api
            .success_with("x", Duration::ZERO, || {})
            .handle()
            .expect("persistent message should return a handle");
        assert_eq!(api.len(), 1);

        handle.dismiss();
        drive(&api, Duration::from_millis(400));
        assert!(api.is_empty());
    }

    #[test]
    fn timed_message_settles_true_after_timeout() {
        let api = MessageApi::default();
        let closed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&closed);
        let future = api
            .success_with("x", Duration::from_secs(1), move || flag.set(true))
            .settle()
            .expect("timed message should return a future");
        let mut future = Box::pin(future);

        assert_eq!(future.as_mut().now_or_never(), None);
        drive(&api, Duration::from_millis(1_400));
        assert!(closed.get());
        assert_eq!(future.now_or_never(), Some(true));
    }

    #[tokio::test]
    async fn timed_message_settles_on_destroy() {
        let api = MessageApi::default();
        let future = api
            .info(MessageConfig::new("x").key("k").duration(Duration::from_secs(60)))
            .settle()
            .expect("timed message should return a future");

        api.destroy(Some(&Key::from("k")));
        drive(&api, Duration::from_millis(400));
        assert!(future.await);
    }

    #[test]
    fn dropped_group_settles_false() {
        let api = MessageApi::default();
        let future = api
            .info("x")
            .settle()
            .expect("default duration is non-zero");
        drop(api);
        assert_eq!(future.now_or_never(), Some(false));
    }

    #[test]
    fn per_call_duration_wins_over_global_default() {
        let api = MessageApi::default();
        api.config(GlobalConfig {
            duration: Some(Duration::ZERO),
            ..GlobalConfig::default()
        });
        assert!(api.info("persistent").is_handle());
        assert!(!api
            .info(MessageConfig::new("timed").duration(Duration::from_secs(2)))
            .is_handle());
    }

    #[test]
    fn loading_always_returns_handle() {
        let api = MessageApi::default();
        let handle = api
            .loading(MessageConfig::new("working").duration(Duration::from_secs(5)))
            .handle()
            .expect("loading should return a handle");
        assert!(handle.key().as_str().starts_with("notice_"));
    }

    #[test]
    fn loading_is_replaced_in_place() {
        let api = MessageApi::default();
        api.loading(MessageConfig::new("Uploading").key("upload"));
        api.success(MessageConfig::new("Done").key("upload"));

        assert_eq!(api.len(), 1);
        let kind = api.with_manager(|manager| {
            manager
                .get(&Key::from("upload"))
                .map(|notice| notice.content().kind)
        });
        assert_eq!(kind, Some(MessageType::Success));
    }

    #[test]
    fn warn_is_warning() {
        let api = MessageApi::default();
        api.warn(MessageConfig::new("careful").key("w"));
        let kind = api.with_manager(|manager| {
            manager.get(&Key::from("w")).map(|notice| notice.content().kind)
        });
        assert_eq!(kind, Some(MessageType::Warning));
    }

    #[test]
    fn open_uses_configured_kind() {
        let api = MessageApi::default();
        api.open(MessageConfig::new("oops").kind(MessageType::Error).key("e"));
        api.open(MessageConfig::new("plain").key("p"));
        let kinds = api.with_manager(|manager| {
            ["e", "p"].map(|key| manager.get(&Key::from(key)).map(|n| n.content().kind))
        });
        assert_eq!(
            kinds,
            [Some(MessageType::Error), Some(MessageType::Info)]
        );
    }

    #[test]
    fn config_splits_between_facade_and_manager() {
        let api = MessageApi::default();
        api.config(GlobalConfig {
            duration: Some(Duration::from_secs(7)),
            max_count: Some(2),
            prefix_cls: Some("toast".into()),
            top: Some(40.0),
            ..GlobalConfig::default()
        });

        assert_eq!(api.default_duration(), Duration::from_secs(7));
        api.with_manager(|manager| {
            assert_eq!(manager.options().max_count, 2);
            assert_eq!(manager.options().prefix_cls, "toast");
            assert_eq!(manager.options().style.top, Some(40.0));
        });

        let handle = api
            .info_with("x", Duration::ZERO, || {})
            .handle()
            .expect("handle");
        assert!(handle.key().as_str().starts_with("toast_"));
    }

    #[test]
    fn clones_share_state() {
        let api = MessageApi::default();
        let hooked = use_message(&api);
        hooked.info("from hook");
        assert_eq!(api.len(), 1);

        api.destroy(None);
        api.with_manager(|manager| {
            assert!(manager.notices().all(|notice| notice.phase() == Phase::Exiting));
        });
    }

    #[test]
    fn callbacks_may_reenter_the_api() {
        let api = MessageApi::default();
        let inner = api.clone();
        api.config(GlobalConfig {
            max_count: Some(1),
            ..GlobalConfig::default()
        });
        api.info(
            MessageConfig::new("first")
                .key("first")
                .on_close(move || {
                    inner.info(MessageConfig::new("follow-up").key("follow-up"));
                }),
        );
        // Evicts "first", whose callback adds "follow-up", evicting "second"
        api.info(MessageConfig::new("second").key("second"));

        let keys: Vec<String> = api.with_manager(|manager| {
            manager.notices().map(|n| n.user_key().to_string()).collect()
        });
        assert_eq!(keys, vec!["follow-up"]);
    }

    #[test]
    fn click_handler_runs() {
        let api = MessageApi::default();
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        api.info(MessageConfig::new("x").on_click(move || counter.set(counter.get() + 1)));

        let key = api.with_manager(|manager| manager.notices().next().map(|n| n.key().clone()));
        api.update(&NotificationMessage::Clicked(key.expect("notice")));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn dismiss_after_drop_is_harmless() {
        let api = MessageApi::default();
        let handle = api.info_with("x", Duration::ZERO, || {}).handle().expect("handle");
        drop(api);
        handle.dismiss();
    }

    #[test]
    fn oversized_durations_are_capped() {
        let api = MessageApi::default();
        let cap = Duration::from_secs_f32(MAX_MESSAGE_DURATION_SECS);

        api.config(GlobalConfig {
            duration: Some(Duration::MAX),
            ..GlobalConfig::default()
        });
        assert_eq!(api.default_duration(), cap);

        assert!(api.info(MessageConfig::new("a").key("a")).settle().is_some());
        assert!(api
            .warning_with(MessageConfig::new("b").key("b"), Duration::MAX, || {})
            .settle()
            .is_some());
        api.with_manager(|manager| {
            for notice in manager.notices() {
                assert_eq!(notice.duration(), Some(cap));
            }
        });
        drive(&api, Duration::from_millis(400));
        assert_eq!(api.len(), 2);
    }
}
