// SPDX-License-Identifier: MPL-2.0
//! High-level message API on top of the notification manager.
//!
//! [`MessageApi`] maps semantic calls (`success`, `error`, `info`, `warning`,
//! `loading`, `open`) onto [`Manager::add`](crate::ui::notifications::Manager::add),
//! decorating the content with the type's icon and accent color and resolving
//! the duration and key defaults.
//!
//! Every call returns a [`Dismissal`]: a [`DismissHandle`] for persistent
//! notices (and for `loading`), or a [`SettleFuture`] that resolves once an
//! auto-dismissing notice has been removed.
//!
//! # Usage
//!
//! ```
//! use iced_message::message::{GlobalConfig, MessageApi, MessageConfig};
//! use std::time::Duration;
//!
//! let message = MessageApi::default();
//! message.config(GlobalConfig {
//!     max_count: Some(3),
//!     ..GlobalConfig::default()
//! });
//!
//! let loading = message.loading(MessageConfig::new("Uploading...").key("upload"));
//! message.success(
//!     MessageConfig::new("Uploaded")
//!         .key("upload")
//!         .duration(Duration::from_secs(2)),
//! );
//! assert_eq!(message.len(), 1);
//! # drop(loading);
//! ```

mod api;
mod args;

pub use api::{use_message, DismissHandle, Dismissal, MessageApi, SettleFuture};
pub use args::{GlobalConfig, MessageArgs, MessageConfig};
pub use crate::ui::notifications::{Content, Icon, Key, MessageType};
