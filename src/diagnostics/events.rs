// SPDX-License-Identifier: MPL-2.0
//! Lifecycle events recorded for notices.

use std::time::Instant;

/// What happened to a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeEventKind {
    /// A new notice was appended.
    Added,
    /// An existing notice received new props under the same key.
    Updated,
    /// The notice was dropped to respect the count limit.
    Evicted,
    /// The leave animation started.
    Closing,
    /// The leave animation finished and the notice left the collection.
    Removed,
}

/// A single recorded lifecycle transition.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    pub kind: NoticeEventKind,
    /// Caller-facing key of the notice.
    pub key: String,
    /// Number of live notices after the transition.
    pub live: usize,
}

impl NoticeEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: NoticeEventKind, key: impl Into<String>, live: usize) -> Self {
        Self::with_timestamp(kind, key, live, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(
        kind: NoticeEventKind,
        key: impl Into<String>,
        live: usize,
        timestamp: Instant,
    ) -> Self {
        Self {
            timestamp,
            kind,
            key: key.into(),
            live,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_timestamp_keeps_given_instant() {
        let at = Instant::now();
        let event = NoticeEvent::with_timestamp(NoticeEventKind::Added, "k", 1, at);
        assert_eq!(event.timestamp, at);
        assert_eq!(event.key, "k");
    }
}
