// SPDX-License-Identifier: MPL-2.0
//! `iced_message` provides toast messages for the Iced GUI framework.
//!
//! The [`message`] module is the high-level entry point: typed calls such as
//! `success` or `loading` that return a dismiss handle or a settle future.
//! Underneath, [`ui::notifications`] holds the ordered notice queue, its
//! stacking offsets and the enter/leave animation geometry for twelve
//! screen placements.

#![doc(html_root_url = "https://docs.rs/iced_message/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod message;
pub mod ui;
