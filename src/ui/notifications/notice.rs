// SPDX-License-Identifier: MPL-2.0
//! A single on-screen notice and its lifecycle.
//!
//! A notice plays exactly one enter animation (on [`Notice::mount`]) and at most
//! one leave animation (on [`Notice::close`], its timer, or the close control).
//! [`Notice::tick`] reports the notice's key once, when the leave animation has
//! finished; that report is the only way a notice leaves the manager.

use super::animation::Animation;
use super::content::NoticeContent;
use super::geometry::{self, Frame, Transform};
use super::placement::{AnimationKind, Placement};
use iced::{Rectangle, Size};
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

/// System-assigned identity of a notice. Never changes, even when the notice is
/// updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeKey(String);

impl NoticeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoticeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-facing key used to update or close a notice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&NoticeKey> for Key {
    fn from(key: &NoticeKey) -> Self {
        Self(key.0.clone())
    }
}

macro_rules! key_from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Key {
                fn from(key: $int) -> Self {
                    Self(key.to_string())
                }
            }
        )*
    };
}

key_from_integer!(i32, i64, u32, u64, usize);

/// Visual overrides for one notice. Unset fields fall back to the group style.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    /// Distance from the anchored edge. Counted twice per notice when stacking.
    pub top: Option<f32>,
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub width: Option<f32>,
}

impl Style {
    #[must_use]
    pub fn top(top: f32) -> Self {
        Self {
            top: Some(top),
            ..Self::default()
        }
    }

    /// Fills every unset field from `base`.
    #[must_use]
    pub fn merged_over(self, base: Style) -> Style {
        Style {
            top: self.top.or(base.top),
            margin_top: self.margin_top.or(base.margin_top),
            margin_bottom: self.margin_bottom.or(base.margin_bottom),
            width: self.width.or(base.width),
        }
    }
}

/// Measured geometry of a rendered notice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl Metrics {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margins(mut self, top: f32, bottom: f32) -> Self {
        self.margin_top = top;
        self.margin_bottom = bottom;
        self
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Height including both margins.
    #[must_use]
    pub fn outer_height(&self) -> f32 {
        self.margin_top + self.height + self.margin_bottom
    }
}

/// Lifecycle phase of a mounted notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Resting,
    Exiting,
    Removed,
}

/// Everything a caller supplies when adding a notice.
pub struct NoticeProps {
    pub key: Option<Key>,
    pub content: NoticeContent,
    /// `None` or zero keeps the notice until it is closed explicitly.
    pub duration: Option<Duration>,
    pub style: Style,
    pub closable: bool,
    pub on_close: Option<Box<dyn FnOnce()>>,
    pub on_click: Option<Rc<dyn Fn()>>,
    /// Resolved with `true` once the notice has been removed.
    pub settle: Option<oneshot::Sender<bool>>,
}

impl NoticeProps {
    pub fn new(content: impl Into<NoticeContent>) -> Self {
        Self {
            key: None,
            content: content.into(),
            duration: None,
            style: Style::default(),
            closable: true,
            on_close: None,
            on_click: None,
            settle: None,
        }
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
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

    #[must_use]
    pub fn settle(mut self, sender: oneshot::Sender<bool>) -> Self {
        self.settle = Some(sender);
        self
    }

    /// Whether the notice dismisses itself.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_none_or(|duration| duration.is_zero())
    }
}

impl fmt::Debug for NoticeProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoticeProps")
            .field("key", &self.key)
            .field("content", &self.content)
            .field("duration", &self.duration)
            .field("style", &self.style)
            .field("closable", &self.closable)
            .field("on_close", &self.on_close.is_some())
            .field("on_click", &self.on_click.is_some())
            .field("settle", &self.settle.is_some())
            .finish()
    }
}

/// A live notice owned by the manager.
pub struct Notice {
    key: NoticeKey,
    user_key: Key,
    content: NoticeContent,
    duration: Option<Duration>,
    style: Style,
    closable: bool,
    on_close: Option<Box<dyn FnOnce()>>,
    on_click: Option<Rc<dyn Fn()>>,
    settle: Vec<oneshot::Sender<bool>>,

    placement: Placement,
    animation_kind: AnimationKind,
    enter_duration: Duration,
    leave_duration: Duration,

    phase: Phase,
    mounted: bool,
    animation: Option<Animation>,
    deadline: Option<Instant>,
    offset: f32,
    frame: Frame,
}

impl Notice {
    pub(crate) fn new(
        key: NoticeKey,
        props: NoticeProps,
        placement: Placement,
        animation_kind: AnimationKind,
        timings: (Duration, Duration),
    ) -> Self {
        let user_key = props.key.unwrap_or_else(|| Key::from(&key));
        Self {
            key,
            user_key,
            content: props.content,
            duration: props.duration,
            style: props.style,
            closable: props.closable,
            on_close: props.on_close,
            on_click: props.on_click,
            settle: props.settle.into_iter().collect(),
            placement,
            animation_kind,
            enter_duration: timings.0,
            leave_duration: timings.1,
            phase: Phase::Entering,
            mounted: false,
            animation: None,
            deadline: None,
            offset: 0.0,
            frame: Frame {
                bounds: Rectangle::default(),
                viewport: Size::ZERO,
                inset: 0.0,
            },
        }
    }

    /// Starts the enter animation and arms the dismiss timer.
    ///
    /// Only the first call has an effect; returns whether it did.
    pub fn mount(&mut self, now: Instant) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.phase = Phase::Entering;
        let from = geometry::enter_start(self.placement, self.animation_kind, &self.frame);
        let to = geometry::enter_end(self.placement, self.animation_kind);
        self.animation = Some(Animation::new(from, to, now, self.enter_duration));
        self.arm_timer(now);
        true
    }

    /// Starts the leave animation from wherever the notice currently is.
    ///
    /// Returns `false` if the notice is already leaving.
    pub fn close(&mut self, now: Instant) -> bool {
        if matches!(self.phase, Phase::Exiting | Phase::Removed) {
            return false;
        }
        let from = self.transform(now);
        let to = geometry::leave_end(self.placement, self.animation_kind, &self.frame);
        self.animation = Some(Animation::new(from, to, now, self.leave_duration));
        self.phase = Phase::Exiting;
        self.deadline = None;
        true
    }

    /// Close control handler. Ignored when the notice is not closable.
    pub fn request_close(&mut self, now: Instant) -> bool {
        self.closable && self.close(now)
    }

    /// Advances the lifecycle. Returns the notice key exactly once, when the
    /// leave animation has completed.
    pub fn tick(&mut self, now: Instant) -> Option<NoticeKey> {
        if !self.mounted || self.phase == Phase::Removed {
            return None;
        }

        if self.phase == Phase::Entering
            && self.animation.is_none_or(|animation| animation.is_finished(now))
        {
            self.phase = Phase::Resting;
            self.animation = None;
        }

        if matches!(self.phase, Phase::Entering | Phase::Resting)
            && self.deadline.is_some_and(|deadline| now >= deadline)
        {
            self.close(now);
        }

        if self.phase == Phase::Exiting
            && self.animation.is_none_or(|animation| animation.is_finished(now))
        {
            self.phase = Phase::Removed;
            return Some(self.key.clone());
        }

        None
    }

    /// Replaces the caller-supplied props, keeping identity and position.
    pub(crate) fn update(&mut self, props: NoticeProps, now: Instant) {
        self.content = props.content;
        self.duration = props.duration;
        self.style = props.style;
        self.closable = props.closable;
        self.on_close = props.on_close;
        self.on_click = props.on_click;
        self.settle.extend(props.settle);
        if self.mounted && matches!(self.phase, Phase::Entering | Phase::Resting) {
            self.arm_timer(now);
        }
    }

    pub(crate) fn relayout(&mut self, offset: f32, frame: Frame) {
        self.offset = offset;
        self.frame = frame;
    }

    /// Runs the close callback and resolves every settle signal.
    pub(crate) fn finish(&mut self) {
        if let Some(on_close) = self.on_close.take() {
            on_close();
        }
        for sender in self.settle.drain(..) {
            let _ = sender.send(true);
        }
    }

    pub(crate) fn click(&self) {
        if let Some(on_click) = &self.on_click {
            on_click();
        }
    }

    /// A deadline past the end of the clock keeps the notice open.
    fn arm_timer(&mut self, now: Instant) {
        self.deadline = self
            .duration
            .filter(|duration| !duration.is_zero())
            .and_then(|duration| now.checked_add(duration));
    }

    /// Transform relative to the resting position at `now`.
    #[must_use]
    pub fn transform(&self, now: Instant) -> Transform {
        self.animation
            .map_or(Transform::IDENTITY, |animation| animation.sample(now))
    }

    /// Whether an enter or leave animation is still running.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Exiting)
            && self
                .animation
                .is_some_and(|animation| !animation.is_finished(now))
    }

    #[must_use]
    pub fn key(&self) -> &NoticeKey {
        &self.key
    }

    #[must_use]
    pub fn user_key(&self) -> &Key {
        &self.user_key
    }

    #[must_use]
    pub fn content(&self) -> &NoticeContent {
        &self.content
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn has_click_handler(&self) -> bool {
        self.on_click.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Stacking offset contributed by the notices ahead of this one.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Resting bounds inside the viewport.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        self.frame.bounds
    }

    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub fn animation_kind(&self) -> AnimationKind {
        self.animation_kind
    }
}

impl fmt::Debug for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notice")
            .field("key", &self.key)
            .field("user_key", &self.user_key)
            .field("content", &self.content)
            .field("duration", &self.duration)
            .field("phase", &self.phase)
            .field("placement", &self.placement)
            .field("offset", &self.offset)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}
