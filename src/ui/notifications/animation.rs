// SPDX-License-Identifier: MPL-2.0
//! Time-based tweening between two transforms.

use super::geometry::Transform;
use crate::config::MAX_ANIMATION_DURATION_MS;
use std::time::{Duration, Instant};

/// Timing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)` with fixed end points (0,0) and (1,1).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Fast start, long soft landing. Used for both enter and leave motion.
    pub const DECELERATE: Easing = Easing::CubicBezier(0.0, 0.0, 0.32, 1.0);

    /// Eased progress for linear progress `t` in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                if t <= 0.0 || t >= 1.0 {
                    return t;
                }
                let s = solve_parameter(x1, x2, t);
                bezier(y1, y2, s)
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::DECELERATE
    }
}

const EPSILON: f32 = 1e-6;
const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 40;

/// One coordinate of a cubic Bezier with end points 0 and 1.
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Finds the curve parameter whose x coordinate equals `x`.
fn solve_parameter(x1: f32, x2: f32, x: f32) -> f32 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier(x1, x2, s) - x;
        if error.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < EPSILON {
            break;
        }
        s -= error / slope;
    }
    if (0.0..=1.0).contains(&s) && (bezier(x1, x2, s) - x).abs() < EPSILON {
        return s;
    }

    // Newton diverged or stalled on a flat segment
    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier(x1, x2, s);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) / 2.0;
    }
    s
}

/// A single transition from one transform to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: Transform,
    to: Transform,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Animation {
    /// Durations are capped at [`MAX_ANIMATION_DURATION_MS`].
    #[must_use]
    pub fn new(from: Transform, to: Transform, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration: duration.min(Duration::from_millis(MAX_ANIMATION_DURATION_MS)),
            easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in `[0, 1]`. Zero-length animations are always complete.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Transform at `now`, eased.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Transform {
        if self.is_finished(now) {
            return self.to;
        }
        let t = self.easing.apply(self.progress(now));
        self.from.interpolate(&self.to, t)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    #[must_use]
    pub fn from(&self) -> Transform {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Transform {
        self.to
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// End of the animation, or its start when the clock cannot represent it.
    #[must_use]
    pub fn ends_at(&self) -> Instant {
        self.started_at
            .checked_add(self.duration)
            .unwrap_or(self.started_at)
    }
}
