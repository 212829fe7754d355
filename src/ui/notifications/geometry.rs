// SPDX-License-Identifier: MPL-2.0
//! Enter and leave transforms for notices.
//!
//! Every transform is expressed relative to the notice's resting position, so the
//! end of the enter animation and the start of the leave animation are both
//! [`Transform::IDENTITY`]. Slide distances come from the notice's measured
//! bounds rather than fixed constants, which keeps multi-line notices fully
//! off-screen at both ends of the animation.

use super::placement::{AnimationKind, HorizontalAnchor, Placement, SlideDirection, VerticalAnchor};
use iced::{Point, Rectangle, Size, Vector};

/// A length made of a fraction of the element's own extent plus pixels.
///
/// `Offset::calc(1.0, 8.0)` is the equivalent of `calc(100% + 8px)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub relative: f32,
    pub absolute: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset {
        relative: 0.0,
        absolute: 0.0,
    };

    #[must_use]
    pub const fn pixels(absolute: f32) -> Self {
        Self {
            relative: 0.0,
            absolute,
        }
    }

    #[must_use]
    pub const fn calc(relative: f32, absolute: f32) -> Self {
        Self { relative, absolute }
    }

    /// Resolves the offset against the element extent along its axis.
    #[must_use]
    pub fn resolve(self, extent: f32) -> f32 {
        self.relative * extent + self.absolute
    }

    fn lerp(self, other: Offset, t: f32) -> Offset {
        Offset {
            relative: self.relative + (other.relative - self.relative) * t,
            absolute: self.absolute + (other.absolute - self.absolute) * t,
        }
    }
}

/// Visual transform applied on top of a notice's resting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: Offset,
    pub y: Offset,
    pub opacity: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        x: Offset::ZERO,
        y: Offset::ZERO,
        opacity: 1.0,
    };

    #[must_use]
    pub const fn translate_x(x: Offset) -> Self {
        Self {
            x,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub const fn translate_y(pixels: f32) -> Self {
        Self {
            y: Offset::pixels(pixels),
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub const fn faded(opacity: f32) -> Self {
        Self {
            opacity,
            ..Self::IDENTITY
        }
    }

    /// Translation in pixels for an element of the given size.
    #[must_use]
    pub fn resolve(&self, size: Size) -> Vector {
        Vector::new(self.x.resolve(size.width), self.y.resolve(size.height))
    }

    /// Linear blend between `self` (at `t = 0`) and `other` (at `t = 1`).
    #[must_use]
    pub fn interpolate(&self, other: &Transform, t: f32) -> Transform {
        Transform {
            x: self.x.lerp(other.x, t),
            y: self.y.lerp(other.y, t),
            opacity: self.opacity + (other.opacity - self.opacity) * t,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Measured context of one notice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Resting bounds of the notice inside the viewport.
    pub bounds: Rectangle,
    pub viewport: Size,
    /// Horizontal gap kept between non-centered notices and the viewport edge.
    pub inset: f32,
}

#[must_use]
pub fn enter_start(placement: Placement, kind: AnimationKind, frame: &Frame) -> Transform {
    match kind {
        AnimationKind::Fade => Transform::faded(0.0),
        AnimationKind::Slide => off_screen(placement.direction(), frame),
    }
}

#[must_use]
pub fn enter_end(_placement: Placement, _kind: AnimationKind) -> Transform {
    Transform::IDENTITY
}

#[must_use]
pub fn leave_start() -> Transform {
    Transform::IDENTITY
}

#[must_use]
pub fn leave_end(placement: Placement, kind: AnimationKind, frame: &Frame) -> Transform {
    match kind {
        AnimationKind::Fade => Transform::faded(0.0),
        AnimationKind::Slide => off_screen(placement.direction(), frame),
    }
}

/// Translation that moves a resting notice just past its anchor edge.
fn off_screen(direction: SlideDirection, frame: &Frame) -> Transform {
    let top = frame.bounds.y;
    let height = frame.bounds.height;

    match direction {
        SlideDirection::TopLeft | SlideDirection::TopCenter | SlideDirection::TopRight => {
            Transform::translate_y(-(top + height))
        }
        SlideDirection::BottomLeft | SlideDirection::BottomCenter | SlideDirection::BottomRight => {
            Transform::translate_y(frame.viewport.height - top)
        }
        SlideDirection::Right => Transform::translate_x(Offset::calc(1.0, frame.inset)),
        SlideDirection::Left => Transform::translate_x(Offset::calc(-1.0, -frame.inset)),
    }
}

/// Top-left corner of a notice at rest.
///
/// `stack_offset` is the accumulated extent of the notices ahead of this one;
/// top and centered groups grow downward, bottom groups grow upward.
#[must_use]
pub fn resting_position(
    placement: Placement,
    viewport: Size,
    size: Size,
    stack_offset: f32,
    top: f32,
    inset: f32,
) -> Point {
    let x = match placement.horizontal() {
        HorizontalAnchor::Start => inset,
        HorizontalAnchor::Center => (viewport.width - size.width) / 2.0,
        HorizontalAnchor::End => viewport.width - size.width - inset,
    };
    let y = match placement.vertical() {
        VerticalAnchor::Top => top + stack_offset,
        VerticalAnchor::Center => (viewport.height - size.height) / 2.0 + stack_offset,
        VerticalAnchor::Bottom => viewport.height - top - stack_offset - size.height,
    };
    Point::new(x, y)
}
