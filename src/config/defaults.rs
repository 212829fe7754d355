// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Message**: Facade-level defaults (auto-dismiss duration)
//! - **Queue**: Notification queue limits and key generation
//! - **Layout**: Stacking offsets and viewport insets
//! - **Animation**: Enter/leave timings and the tick cadence

// ==========================================================================
// Message Defaults
// ==========================================================================

/// Default auto-dismiss duration for messages (in seconds). `0` keeps a
/// message on screen until it is closed explicitly.
pub const DEFAULT_MESSAGE_DURATION_SECS: f32 = 3.0;

/// Longest accepted auto-dismiss duration (in seconds).
pub const MAX_MESSAGE_DURATION_SECS: f32 = 3600.0;

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default maximum number of live notices in one queue.
pub const DEFAULT_MAX_COUNT: usize = 10_000;

/// Smallest accepted `max_count`.
pub const MIN_MAX_COUNT: usize = 1;

/// Prefix used for generated notice keys.
pub const DEFAULT_PREFIX_CLS: &str = "notice";

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default `top` style offset applied to every notice (in pixels).
pub const DEFAULT_TOP_OFFSET: f32 = 8.0;

/// Horizontal inset between non-centered notices and the viewport edge.
pub const DEFAULT_VIEWPORT_INSET: f32 = 8.0;

/// Viewport size assumed until the host reports the real window size.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1024.0;

/// Viewport height assumed until the host reports the real window size.
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 768.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the enter animation (in milliseconds).
pub const DEFAULT_ENTER_DURATION_MS: u64 = 300;

/// Duration of the leave animation (in milliseconds).
pub const DEFAULT_LEAVE_DURATION_MS: u64 = 300;

/// Longest accepted enter or leave animation (in milliseconds).
pub const MAX_ANIMATION_DURATION_MS: u64 = 10_000;

/// Interval between animation ticks while notices are moving (~60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MESSAGE_DURATION_SECS >= 0.0);
    assert!(MAX_MESSAGE_DURATION_SECS > DEFAULT_MESSAGE_DURATION_SECS);

    assert!(MIN_MAX_COUNT > 0);
    assert!(DEFAULT_MAX_COUNT >= MIN_MAX_COUNT);

    assert!(DEFAULT_TOP_OFFSET >= 0.0);
    assert!(DEFAULT_VIEWPORT_INSET >= 0.0);
    assert!(DEFAULT_VIEWPORT_WIDTH > 0.0);
    assert!(DEFAULT_VIEWPORT_HEIGHT > 0.0);

    assert!(DEFAULT_ENTER_DURATION_MS > 0);
    assert!(DEFAULT_LEAVE_DURATION_MS > 0);
    assert!(MAX_ANIMATION_DURATION_MS >= DEFAULT_ENTER_DURATION_MS);
    assert!(MAX_ANIMATION_DURATION_MS >= DEFAULT_LEAVE_DURATION_MS);
    assert!(ANIMATION_TICK_MS > 0);
    assert!(ANIMATION_TICK_MS < DEFAULT_ENTER_DURATION_MS);
};
