// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue with animated entry and exit.
//!
//! # Components
//!
//! - [`placement`] - The twelve anchor positions and animation styles
//! - [`geometry`] - Enter/leave transforms and resting positions
//! - [`animation`] - Eased tweening between transforms
//! - [`content`] - Message type, icon and text of a notice
//! - [`notice`] - One notice and its lifecycle
//! - [`manager`] - The ordered notice collection and its stacking offsets
//! - [`toast`] - Iced rendering of notices
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, NoticeProps, NotificationMessage, Toast};
//!
//! let mut manager = Manager::default();
//! manager.add(NoticeProps::new("Image saved").duration(Duration::from_secs(3)), Instant::now());
//!
//! // In update
//! manager.handle_message(&message);
//!
//! // In view, layered over the application
//! let overlay = Toast::view_overlay(&manager, &i18n, &colors, now).map(Message::Notification);
//!
//! // In subscription
//! manager.subscription().map(Message::Notification)
//! ```

pub mod animation;
pub mod content;
pub mod geometry;
pub mod manager;
pub mod notice;
pub mod placement;
pub mod toast;

pub use animation::{Animation, Easing};
pub use content::{Content, Icon, MessageType, NoticeContent};
pub use geometry::{Frame, Offset, Transform};
pub use manager::{
    KeyGenerator, Manager, MeasureFn, Message as NotificationMessage, Options, OptionsPatch,
};
pub use notice::{Key, Metrics, Notice, NoticeKey, NoticeProps, Phase, Style};
pub use placement::{AnimationKind, HorizontalAnchor, Placement, SlideDirection, VerticalAnchor};
pub use toast::Toast;
