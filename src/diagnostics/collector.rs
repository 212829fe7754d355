// SPDX-License-Identifier: MPL-2.0
//! Collector that drains lifecycle events into a circular buffer.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{CircularBuffer, NoticeEvent, NoticeEventKind};

/// Default number of events kept in memory.
pub const DEFAULT_BUFFER_CAPACITY: usize = 500;

/// Channel capacity between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending events to the collector.
///
/// Cheap to clone. Sends never block: events are dropped when the channel is
/// full or the collector is gone.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<NoticeEvent>,
}

impl DiagnosticsHandle {
    /// Records a lifecycle transition.
    pub fn log_notice(&self, kind: NoticeEventKind, key: &str, live: usize) {
        let _ = self.event_tx.try_send(NoticeEvent::new(kind, key, live));
    }
}

/// Central store for notice events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<NoticeEvent>,
    event_rx: Receiver<NoticeEvent>,
    event_tx: Sender<NoticeEvent>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    ///
    /// Call this periodically, e.g. on each UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Records an event directly, bypassing the channel.
    pub fn log(&mut self, event: NoticeEvent) {
        self.buffer.push(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &NoticeEvent> {
        self.buffer.iter()
    }

    /// Number of stored events of one kind.
    #[must_use]
    pub fn count(&self, kind: NoticeEventKind) -> usize {
        self.buffer.iter().filter(|event| event.kind == kind).count()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_CAPACITY)
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish_non_exhaustive()
    }
}
