// SPDX-License-Identifier: MPL-2.0
//! Notice collection, stacking and lifecycle.
//!
//! The [`Manager`] keeps live notices in insertion order (oldest first) and a
//! registry of their measured geometry keyed by user key. Whenever the
//! collection or a measurement changes, every notice's stacking offset is
//! recomputed from the notices ahead of it in the same placement group.
//!
//! Time is always passed in explicitly, so the whole lifecycle can be driven
//! deterministically from tests as well as from an Iced subscription.

use super::content::NoticeContent;
use super::geometry::{self, Frame};
use super::notice::{Key, Metrics, Notice, NoticeKey, NoticeProps, Phase, Style};
use super::placement::{AnimationKind, Placement};
use super::toast::Toast;
use crate::config::{
    ANIMATION_TICK_MS, DEFAULT_ENTER_DURATION_MS, DEFAULT_LEAVE_DURATION_MS, DEFAULT_MAX_COUNT,
    DEFAULT_PREFIX_CLS, DEFAULT_TOP_OFFSET, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_INSET,
    DEFAULT_VIEWPORT_WIDTH, MAX_ANIMATION_DURATION_MS, MIN_MAX_COUNT,
};
use crate::diagnostics::{DiagnosticsHandle, NoticeEventKind};
use iced::{Rectangle, Size, Subscription};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Produces the geometry of a notice before the host reports a real measurement.
pub type MeasureFn = fn(&NoticeContent, &Style) -> Metrics;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Animation and timer clock.
    Tick(Instant),
    /// The close control of a notice was pressed.
    Close(NoticeKey),
    /// The body of a notice was clicked.
    Clicked(NoticeKey),
    /// The viewport changed size.
    Resized(Size),
    /// The host measured a rendered notice.
    Measured(Key, Metrics),
}

/// Runtime configuration of a notification group.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub max_count: usize,
    pub placement: Placement,
    pub animation: AnimationKind,
    /// Prefix of generated keys.
    pub prefix_cls: String,
    /// Group style; per-notice styles are merged over it.
    pub style: Style,
    pub inset: f32,
    /// Mirrors horizontal placements.
    pub rtl: bool,
    pub enter_duration: Duration,
    pub leave_duration: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
            placement: Placement::default(),
            animation: AnimationKind::default(),
            prefix_cls: DEFAULT_PREFIX_CLS.to_string(),
            style: Style::top(DEFAULT_TOP_OFFSET),
            inset: DEFAULT_VIEWPORT_INSET,
            rtl: false,
            enter_duration: Duration::from_millis(DEFAULT_ENTER_DURATION_MS),
            leave_duration: Duration::from_millis(DEFAULT_LEAVE_DURATION_MS),
        }
    }
}

impl Options {
    /// Placement after applying the reading direction.
    #[must_use]
    pub fn effective_placement(&self) -> Placement {
        if self.rtl {
            self.placement.mirrored()
        } else {
            self.placement
        }
    }

    /// Merges `patch` into these options. Invalid values are clamped.
    pub fn apply(&mut self, patch: OptionsPatch) {
        if let Some(max_count) = patch.max_count {
            self.max_count = max_count.max(MIN_MAX_COUNT);
        }
        if let Some(placement) = patch.placement {
            self.placement = placement;
        }
        if let Some(animation) = patch.animation {
            self.animation = animation;
        }
        if let Some(prefix_cls) = patch.prefix_cls {
            self.prefix_cls = prefix_cls;
        }
        if let Some(style) = patch.style {
            self.style = style.merged_over(self.style);
        }
        if let Some(inset) = patch.inset {
            self.inset = inset.max(0.0);
        }
        if let Some(rtl) = patch.rtl {
            self.rtl = rtl;
        }
        let longest = Duration::from_millis(MAX_ANIMATION_DURATION_MS);
        if let Some(duration) = patch.enter_duration {
            self.enter_duration = duration.min(longest);
        }
        if let Some(duration) = patch.leave_duration {
            self.leave_duration = duration.min(longest);
        }
    }
}

/// Partial update of [`Options`]. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionsPatch {
    pub max_count: Option<usize>,
    pub placement: Option<Placement>,
    pub animation: Option<AnimationKind>,
    pub prefix_cls: Option<String>,
    pub style: Option<Style>,
    pub inset: Option<f32>,
    pub rtl: Option<bool>,
    pub enter_duration: Option<Duration>,
    pub leave_duration: Option<Duration>,
}

/// Generates notice keys unique for the lifetime of the process.
///
/// Keys combine the creation timestamp with a counter that is never reset,
/// so two managers created at different times never collide either.
#[derive(Debug, Clone)]
pub struct KeyGenerator {
    seed: u64,
    started_at_ms: i64,
}

impl KeyGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_timestamp(chrono::Utc::now().timestamp_millis())
    }

    #[must_use]
    pub fn with_timestamp(started_at_ms: i64) -> Self {
        Self {
            seed: 0,
            started_at_ms,
        }
    }

    pub fn next_key(&mut self, prefix: &str) -> NoticeKey {
        let key = NoticeKey::new(format!("{prefix}_{}_{}", self.started_at_ms, self.seed));
        self.seed += 1;
        key
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the live notices of one notification group.
pub struct Manager {
    notices: Vec<Notice>,
    registry: HashMap<Key, Metrics>,
    options: Options,
    keys: KeyGenerator,
    viewport: Size,
    last_tick: Option<Instant>,
    measure: MeasureFn,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            notices: Vec::new(),
            registry: HashMap::new(),
            options,
            keys: KeyGenerator::new(),
            viewport: Size::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
            last_tick: None,
            measure: Toast::estimate_metrics,
            diagnostics: None,
        }
    }

    /// Replaces the function used to size notices before they are measured.
    #[must_use]
    pub fn with_measure(mut self, measure: MeasureFn) -> Self {
        self.measure = measure;
        self
    }

    #[must_use]
    pub fn with_key_generator(mut self, keys: KeyGenerator) -> Self {
        self.keys = keys;
        self
    }

    /// Reserves a fresh key for a notice that has not been added yet.
    pub fn generate_key(&mut self) -> Key {
        Key::from(&self.keys.next_key(&self.options.prefix_cls))
    }

    /// Sets the diagnostics handle for lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Adds a notice, or updates the live notice with the same user key.
    ///
    /// Returns the system key of the added or updated notice.
    pub fn add(&mut self, props: NoticeProps, now: Instant) -> NoticeKey {
        let style = props.style.merged_over(self.options.style);
        let metrics = (self.measure)(&props.content, &style);

        if let Some(user_key) = props.key.clone() {
            if let Some(notice) = self.notices.iter_mut().find(|n| *n.user_key() == user_key) {
                notice.update(props, now);
                let key = notice.key().clone();
                self.registry.insert(user_key.clone(), metrics);
                tracing::debug!(key = %user_key, "notice updated in place");
                self.record(NoticeEventKind::Updated, &user_key);
                self.recompute_offsets();
                return key;
            }
        }

        let key = self.keys.next_key(&self.options.prefix_cls);
        let notice = Notice::new(
            key.clone(),
            props,
            self.options.effective_placement(),
            self.options.animation,
            (self.options.enter_duration, self.options.leave_duration),
        );
        let user_key = notice.user_key().clone();
        self.registry.insert(user_key.clone(), metrics);
        self.notices.push(notice);
        tracing::debug!(key = %user_key, live = self.notices.len(), "notice added");
        self.record(NoticeEventKind::Added, &user_key);

        self.evict();
        self.recompute_offsets();
        if let Some(notice) = self.notices.iter_mut().find(|n| *n.key() == key) {
            notice.mount(now);
        }
        key
    }

    /// Starts the leave animation of the notice with `key`, or of every notice
    /// when `key` is `None`. Unknown keys are ignored.
    ///
    /// Returns how many notices started leaving.
    pub fn remove(&mut self, key: Option<&Key>, now: Instant) -> usize {
        let mut closed = Vec::new();
        for notice in &mut self.notices {
            if key.is_some_and(|key| notice.user_key() != key) {
                continue;
            }
            if notice.close(now) {
                closed.push(notice.user_key().clone());
            }
        }
        for user_key in &closed {
            tracing::debug!(key = %user_key, "notice closing");
            self.record(NoticeEventKind::Closing, user_key);
        }
        closed.len()
    }

    /// Merges `patch` into the runtime options.
    ///
    /// Placement and animation apply to notices added afterwards; the count
    /// limit and group style apply immediately.
    pub fn config(&mut self, patch: OptionsPatch) {
        self.options.apply(patch);
        tracing::debug!(options = ?self.options, "notification options changed");
        self.evict();
        self.recompute_offsets();
    }

    /// Stores the measured geometry of the notice with user key `key`.
    pub fn measure(&mut self, key: &Key, metrics: Metrics) {
        if !self.notices.iter().any(|notice| notice.user_key() == key) {
            return;
        }
        if self.registry.get(key) == Some(&metrics) {
            return;
        }
        self.registry.insert(key.clone(), metrics);
        self.recompute_offsets();
    }

    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.recompute_offsets();
    }

    /// Advances every notice. Returns the keys of the notices removed.
    pub fn tick(&mut self, now: Instant) -> Vec<NoticeKey> {
        self.last_tick = Some(now);

        let mut closing = Vec::new();
        let finished: Vec<NoticeKey> = self
            .notices
            .iter_mut()
            .filter_map(|notice| {
                let was_leaving = notice.phase() == Phase::Exiting;
                let finished = notice.tick(now);
                if !was_leaving && matches!(notice.phase(), Phase::Exiting | Phase::Removed) {
                    closing.push(notice.user_key().clone());
                }
                finished
            })
            .collect();

        for user_key in &closing {
            tracing::debug!(key = %user_key, "notice timed out");
            self.record(NoticeEventKind::Closing, user_key);
        }
        for key in &finished {
            self.unmount(key);
        }
        finished
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Tick(now) => {
                self.tick(*now);
            }
            Message::Close(key) => {
                let now = Instant::now();
                if let Some(notice) = self.notices.iter_mut().find(|n| n.key() == key) {
                    if notice.request_close(now) {
                        let user_key = notice.user_key().clone();
                        self.record(NoticeEventKind::Closing, &user_key);
                    }
                }
            }
            Message::Clicked(key) => {
                if let Some(notice) = self.notices.iter().find(|n| n.key() == key) {
                    notice.click();
                }
            }
            Message::Resized(size) => self.resize(*size),
            Message::Measured(key, metrics) => self.measure(key, *metrics),
        }
    }

    /// Removes a notice whose leave animation has finished.
    fn unmount(&mut self, key: &NoticeKey) -> bool {
        let Some(index) = self.notices.iter().position(|notice| notice.key() == key) else {
            return false;
        };
        let mut notice = self.notices.remove(index);
        self.registry.remove(notice.user_key());
        notice.finish();
        tracing::debug!(key = %notice.user_key(), live = self.notices.len(), "notice removed");
        self.record(NoticeEventKind::Removed, notice.user_key());
        self.recompute_offsets();
        true
    }

    /// Drops the oldest notices beyond the count limit.
    fn evict(&mut self) {
        let excess = self.notices.len().saturating_sub(self.options.max_count);
        if excess == 0 {
            return;
        }
        let evicted: Vec<Notice> = self.notices.drain(..excess).collect();
        for mut notice in evicted {
            self.registry.remove(notice.user_key());
            notice.finish();
            tracing::debug!(key = %notice.user_key(), "notice evicted");
            self.record(NoticeEventKind::Evicted, notice.user_key());
        }
    }

    /// Lays out every notice from the registry and the current options.
    fn recompute_offsets(&mut self) {
        let mut stacks: HashMap<Placement, f32> = HashMap::new();

        for notice in &mut self.notices {
            let placement = notice.placement();
            let stack_offset = stacks.get(&placement).copied().unwrap_or(0.0);
            let style = notice.style().merged_over(self.options.style);
            let metrics = self
                .registry
                .get(notice.user_key())
                .copied()
                .unwrap_or_default();
            let top = style.top.unwrap_or(0.0);

            let size = metrics.size();
            let origin = geometry::resting_position(
                placement,
                self.viewport,
                size,
                stack_offset,
                top,
                self.options.inset,
            );
            notice.relayout(
                stack_offset,
                Frame {
                    bounds: Rectangle::new(origin, size),
                    viewport: self.viewport,
                    inset: self.options.inset,
                },
            );

            let contribution = 2.0 * style.top.unwrap_or(0.0) + metrics.outer_height();
            stacks.insert(placement, stack_offset + contribution);
        }
    }

    fn record(&self, kind: NoticeEventKind, key: &Key) {
        if let Some(handle) = &self.diagnostics {
            handle.log_notice(kind, key.as_str(), self.notices.len());
        }
    }

    /// Clock subscription while anything is animating or waiting on a timer.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.needs_tick() {
            iced::time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Whether the next tick can change anything.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.notices.iter().any(|notice| {
            notice.phase() != Phase::Resting || notice.deadline().is_some()
        })
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.notices.iter().any(|notice| notice.is_animating(now))
    }

    /// Live notices, oldest first.
    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Notice> {
        self.notices.iter().find(|notice| notice.user_key() == key)
    }

    #[must_use]
    pub fn frame_of(&self, key: &NoticeKey) -> Option<Frame> {
        self.notices
            .iter()
            .find(|notice| notice.key() == key)
            .map(|notice| *notice.frame())
    }

    #[must_use]
    pub fn metrics_of(&self, key: &Key) -> Option<Metrics> {
        self.registry.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    #[must_use]
    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Time of the last processed tick, if any.
    #[must_use]
    pub fn last_tick(&self) -> Option<Instant> {
        self.last_tick
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("notices", &self.notices)
            .field("options", &self.options)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use approx::assert_abs_diff_eq;
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use std::rc::Rc;

    fn fixed_height(_: &NoticeContent, _: &Style) -> Metrics {
        Metrics::new(300.0, 40.0)
    }

    fn manager() -> Manager {
        Manager::default()
            .with_measure(fixed_height)
            .with_key_generator(KeyGenerator::with_timestamp(1_700_000_000_000))
    }

    fn untopped() -> Manager {
        Manager::new(Options {
            style: Style::default(),
            ..Options::default()
        })
        .with_measure(fixed_height)
    }

    fn drive(manager: &mut Manager, from: Instant, span: Duration) -> Instant {
        let mut now = from;
        let end = from + span;
        while now < end {
            now += Duration::from_millis(ANIMATION_TICK_MS);
            manager.tick(now);
        }
        now
    }

    #[test]
    fn generated_keys_are_unique_and_prefixed() {
        let mut manager = manager();
        let now = Instant::now();
        let keys: HashSet<NoticeKey> = (0..50)
            .map(|i| manager.add(NoticeProps::new(format!("n{i}")), now))
            .collect();
        assert_eq!(keys.len(), 50);
        assert!(keys.contains(&NoticeKey::new("notice_1700000000000_0")));
        assert!(keys.contains(&NoticeKey::new("notice_1700000000000_49")));
    }

    #[test]
    fn same_key_updates_in_place() {
        let mut manager = manager();
        let now = Instant::now();
        let first = manager.add(NoticeProps::new("A").key("k"), now);
        manager.add(NoticeProps::new("other"), now);
        let second = manager.add(NoticeProps::new("B").key("k"), now);

        assert_eq!(first, second);
        assert_eq!(manager.len(), 2);
        let notice = manager.get(&Key::from("k")).expect("notice should exist");
        assert_eq!(notice.content().body, "B".into());
        // Position is preserved
        assert_eq!(manager.notices().next().map(Notice::key), Some(&first));
    }

    #[test]
    fn max_count_evicts_oldest() {
        let mut manager = manager();
        manager.config(OptionsPatch {
            max_count: Some(2),
            ..OptionsPatch::default()
        });
        let closed = Rc::new(RefCell::new(Vec::new()));
        let now = Instant::now();
        for name in ["one", "two", "three"] {
            let log = Rc::clone(&closed);
            manager.add(
                NoticeProps::new(name)
                    .key(name)
                    .on_close(move || log.borrow_mut().push(name)),
                now,
            );
        }

        assert_eq!(manager.len(), 2);
        let keys: Vec<_> = manager.notices().map(|n| n.user_key().to_string()).collect();
        assert_eq!(keys, vec!["two", "three"]);
        assert_eq!(*closed.borrow(), vec!["one"]);
        assert!(manager.metrics_of(&Key::from("one")).is_none());
    }

    #[test]
    fn max_count_is_clamped_to_one() {
        let mut manager = manager();
        manager.config(OptionsPatch {
            max_count: Some(0),
            ..OptionsPatch::default()
        });
        assert_eq!(manager.options().max_count, 1);
    }

    #[test]
    fn offsets_accumulate_heights_without_top() {
        let mut manager = untopped();
        let now = Instant::now();
        for (key, height) in [("a", 30.0), ("b", 50.0), ("c", 70.0)] {
            manager.add(NoticeProps::new(key).key(key), now);
            manager.measure(&Key::from(key), Metrics::new(300.0, height));
        }
        let offsets: Vec<f32> = manager.notices().map(Notice::offset).collect();
        assert_abs_diff_eq!(offsets[0], 0.0);
        assert_abs_diff_eq!(offsets[1], 30.0);
        assert_abs_diff_eq!(offsets[2], 80.0);
    }

    #[test]
    fn offsets_count_top_twice_and_margins() {
        let mut manager = manager();
        let now = Instant::now();
        manager.add(NoticeProps::new("a").key("a"), now);
        manager.add(
            NoticeProps::new("b").key("b").style(Style::top(20.0)),
            now,
        );
        manager.add(NoticeProps::new("c").key("c"), now);
        manager.measure(
            &Key::from("a"),
            Metrics::new(300.0, 40.0).with_margins(2.0, 3.0),
        );

        let offsets: Vec<f32> = manager.notices().map(Notice::offset).collect();
        // a: 2 * 8 + 2 + 40 + 3
        assert_abs_diff_eq!(offsets[1], 61.0);
        // b: 2 * 20 + 40
        assert_abs_diff_eq!(offsets[2], 61.0 + 80.0);
    }

    #[test]
    fn removal_recomputes_offsets() {
        let mut manager = untopped();
        let start = Instant::now();
        manager.add(NoticeProps::new("a").key("a"), start);
        manager.add(NoticeProps::new("b").key("b"), start);
        assert_abs_diff_eq!(manager.get(&Key::from("b")).map_or(-1.0, Notice::offset), 40.0);

        manager.remove(Some(&Key::from("a")), start);
        // Still live while leaving
        assert_abs_diff_eq!(manager.get(&Key::from("b")).map_or(-1.0, Notice::offset), 40.0);

        drive(&mut manager, start, Duration::from_millis(400));
        assert_eq!(manager.len(), 1);
        assert_abs_diff_eq!(manager.get(&Key::from("b")).map_or(-1.0, Notice::offset), 0.0);
    }

    #[test]
    fn unknown_key_is_a_no_op() {
        let mut manager = manager();
        let now = Instant::now();
        manager.add(NoticeProps::new("a").key("a"), now);
        assert_eq!(manager.remove(Some(&Key::from("nope")), now), 0);
        manager.measure(&Key::from("nope"), Metrics::new(1.0, 1.0));
        manager.handle_message(&Message::Close(NoticeKey::new("nope")));
        assert!(manager.metrics_of(&Key::from("nope")).is_none());
        assert_eq!(manager.get(&Key::from("a")).map(Notice::phase), Some(Phase::Entering));
    }

    #[test]
    fn timer_removes_notice_after_duration() {
        let mut manager = manager();
        let start = Instant::now();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        manager.add(
            NoticeProps::new("bye")
                .duration(Duration::from_secs(2))
                .on_close(move || counter.set(counter.get() + 1)),
            start,
        );

        drive(&mut manager, start, Duration::from_millis(2_200));
        assert_eq!(manager.len(), 1);
        assert_eq!(fired.get(), 0);

        drive(&mut manager, start + Duration::from_millis(2_200), Duration::from_millis(200));
        assert!(manager.is_empty());
        assert_eq!(fired.get(), 1);
        assert!(!manager.needs_tick());
    }

    #[test]
    fn zero_duration_never_auto_dismisses() {
        let mut manager = manager();
        let start = Instant::now();
        manager.add(NoticeProps::new("stay").duration(Duration::ZERO), start);
        drive(&mut manager, start, Duration::from_secs(10));
        assert_eq!(manager.len(), 1);
        assert!(!manager.needs_tick());
    }

    #[test]
    fn closing_twice_unmounts_once() {
        let mut manager = manager();
        let start = Instant::now();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        manager.add(
            NoticeProps::new("x")
                .key("x")
                .on_close(move || counter.set(counter.get() + 1)),
            start,
        );
        assert_eq!(manager.remove(Some(&Key::from("x")), start), 1);
        assert_eq!(manager.remove(Some(&Key::from("x")), start), 0);

        drive(&mut manager, start, Duration::from_secs(1));
        assert_eq!(fired.get(), 1);
        assert!(manager.is_empty());
    }

    #[test]
    fn remove_all_closes_each_notice() {
        let mut manager = manager();
        let start = Instant::now();
        for i in 0..3 {
            manager.add(NoticeProps::new(format!("{i}")), start);
        }
        assert_eq!(manager.remove(None, start), 3);
        assert_eq!(manager.len(), 3);
        assert!(manager.notices().all(|n| n.phase() == Phase::Exiting));

        drive(&mut manager, start, Duration::from_millis(400));
        assert!(manager.is_empty());
    }

    #[test]
    fn close_control_ignored_when_not_closable() {
        let mut manager = manager();
        let key = manager.add(NoticeProps::new("x").closable(false), Instant::now());
        manager.handle_message(&Message::Close(key.clone()));
        let notice = manager.notices().next().expect("notice should exist");
        assert_ne!(notice.phase(), Phase::Exiting);
    }

    #[test]
    fn click_runs_handler() {
        let mut manager = manager();
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let key = manager.add(
            NoticeProps::new("x").on_click(move || counter.set(counter.get() + 1)),
            Instant::now(),
        );
        manager.handle_message(&Message::Clicked(key));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn bottom_placement_stacks_upward() {
        let mut manager = untopped();
        manager.config(OptionsPatch {
            placement: Some(Placement::BottomCenter),
            ..OptionsPatch::default()
        });
        manager.resize(Size::new(800.0, 600.0));
        let now = Instant::now();
        let first = manager.add(NoticeProps::new("a"), now);
        let second = manager.add(NoticeProps::new("b"), now);

        let first = manager.frame_of(&first).expect("frame").bounds;
        let second = manager.frame_of(&second).expect("frame").bounds;
        assert_abs_diff_eq!(first.y, 560.0);
        assert_abs_diff_eq!(second.y, 520.0);
    }

    #[test]
    fn rtl_mirrors_new_notices() {
        let mut manager = manager();
        manager.config(OptionsPatch {
            placement: Some(Placement::TopLeft),
            rtl: Some(true),
            ..OptionsPatch::default()
        });
        manager.add(NoticeProps::new("x"), Instant::now());
        assert_eq!(
            manager.notices().next().map(Notice::placement),
            Some(Placement::TopRight)
        );
    }

    #[test]
    fn diagnostics_record_lifecycle() {
        let mut collector = DiagnosticsCollector::new(50);
        let mut manager = manager();
        manager.set_diagnostics(collector.handle());
        let start = Instant::now();

        manager.add(NoticeProps::new("a").key("k"), start);
        manager.add(NoticeProps::new("b").key("k"), start);
        manager.remove(None, start);
        drive(&mut manager, start, Duration::from_millis(400));

        collector.process_pending();
        assert_eq!(collector.count(NoticeEventKind::Added), 1);
        assert_eq!(collector.count(NoticeEventKind::Updated), 1);
        assert_eq!(collector.count(NoticeEventKind::Closing), 1);
        assert_eq!(collector.count(NoticeEventKind::Removed), 1);
    }

    #[test]
    fn style_patch_merges_instead_of_replacing() {
        let mut manager = manager();
        manager.config(OptionsPatch {
            style: Some(Style {
                margin_bottom: Some(4.0),
                ..Style::default()
            }),
            ..OptionsPatch::default()
        });
        assert_eq!(manager.options().style.top, Some(DEFAULT_TOP_OFFSET));
        assert_eq!(manager.options().style.margin_bottom, Some(4.0));
    }

    #[test]
    fn animation_durations_are_clamped() {
        let mut manager = manager();
        manager.config(OptionsPatch {
            enter_duration: Some(Duration::MAX),
            leave_duration: Some(Duration::from_secs(u64::MAX)),
            ..OptionsPatch::default()
        });
        let longest = Duration::from_millis(MAX_ANIMATION_DURATION_MS);
        assert_eq!(manager.options().enter_duration, longest);
        assert_eq!(manager.options().leave_duration, longest);

        let now = Instant::now();
        manager.add(NoticeProps::new("a").key("a"), now);
        manager.tick(now);
        manager.remove(Some(&Key::from("a")), now);
        drive(&mut manager, now, longest + Duration::from_millis(100));
        assert!(manager.is_empty());
    }

    #[test]
    fn rendered_size_replaces_estimate() {
        let mut manager = manager();
        let now = Instant::now();
        manager.add(NoticeProps::new("a").key("a"), now);
        manager.add(NoticeProps::new("b").key("b"), now);
        // 2 * 8 + 40 from the estimate
        assert_abs_diff_eq!(manager.get(&Key::from("b")).map_or(-1.0, Notice::offset), 56.0);

        let group = manager.options().style;
        let report = Toast::measured(Key::from("a"), &group);
        manager.handle_message(&report(Size::new(300.0, 90.0)));

        assert_eq!(manager.metrics_of(&Key::from("a")), Some(Metrics::new(300.0, 90.0)));
        assert_abs_diff_eq!(manager.get(&Key::from("b")).map_or(-1.0, Notice::offset), 106.0);
    }

    #[test]
    fn placement_change_keeps_live_notices_in_their_group() {
        let mut manager = untopped();
        let now = Instant::now();
        manager.add(NoticeProps::new("a").key("a"), now);
        manager.config(OptionsPatch {
            placement: Some(Placement::BottomCenter),
            animation: Some(AnimationKind::Fade),
            ..OptionsPatch::default()
        });
        manager.add(NoticeProps::new("b").key("b"), now);

        let a = manager.get(&Key::from("a")).expect("a is live");
        assert_eq!(a.placement(), Placement::TopCenter);
        assert_eq!(a.animation_kind(), AnimationKind::Slide);
        let b = manager.get(&Key::from("b")).expect("b is live");
        assert_eq!(b.placement(), Placement::BottomCenter);
        // Groups stack independently
        assert_abs_diff_eq!(b.offset(), 0.0);
    }
}
