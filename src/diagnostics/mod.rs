// SPDX-License-Identifier: MPL-2.0
//! Bounded in-memory record of notice lifecycle events.
//!
//! The notification manager reports every add, update, eviction, close and
//! removal through a [`DiagnosticsHandle`]. Events travel over a bounded
//! channel and are stored by the [`DiagnosticsCollector`] in a
//! [`CircularBuffer`], so a long-running application never grows the log
//! without limit.

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{NoticeEvent, NoticeEventKind};
