// SPDX-License-Identifier: MPL-2.0
//! Anchor positions and animation styles for a notification group.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screen-relative anchor of a notification group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Placement {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    RightTop,
    RightCenter,
    RightBottom,
    BottomLeft,
    BottomCenter,
    BottomRight,
    LeftTop,
    LeftCenter,
    LeftBottom,
}

/// Slide class of a placement: which edge a notice enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    TopLeft,
    TopCenter,
    TopRight,
    Right,
    BottomLeft,
    BottomCenter,
    BottomRight,
    Left,
}

/// Horizontal alignment of a placement inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Start,
    Center,
    End,
}

/// Vertical alignment of a placement inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top,
    Center,
    Bottom,
}

impl Placement {
    pub const ALL: [Placement; 12] = [
        Placement::TopLeft,
        Placement::TopCenter,
        Placement::TopRight,
        Placement::RightTop,
        Placement::RightCenter,
        Placement::RightBottom,
        Placement::BottomLeft,
        Placement::BottomCenter,
        Placement::BottomRight,
        Placement::LeftTop,
        Placement::LeftCenter,
        Placement::LeftBottom,
    ];

    #[must_use]
    pub fn direction(self) -> SlideDirection {
        match self {
            Placement::TopLeft => SlideDirection::TopLeft,
            Placement::TopCenter => SlideDirection::TopCenter,
            Placement::TopRight => SlideDirection::TopRight,
            Placement::RightTop | Placement::RightCenter | Placement::RightBottom => {
                SlideDirection::Right
            }
            Placement::BottomLeft => SlideDirection::BottomLeft,
            Placement::BottomCenter => SlideDirection::BottomCenter,
            Placement::BottomRight => SlideDirection::BottomRight,
            Placement::LeftTop | Placement::LeftCenter | Placement::LeftBottom => {
                SlideDirection::Left
            }
        }
    }

    #[must_use]
    pub fn horizontal(self) -> HorizontalAnchor {
        match self {
            Placement::TopLeft
            | Placement::BottomLeft
            | Placement::LeftTop
            | Placement::LeftCenter
            | Placement::LeftBottom => HorizontalAnchor::Start,
            Placement::TopCenter | Placement::BottomCenter => HorizontalAnchor::Center,
            Placement::TopRight
            | Placement::BottomRight
            | Placement::RightTop
            | Placement::RightCenter
            | Placement::RightBottom => HorizontalAnchor::End,
        }
    }

    #[must_use]
    pub fn vertical(self) -> VerticalAnchor {
        match self {
            Placement::TopLeft
            | Placement::TopCenter
            | Placement::TopRight
            | Placement::RightTop
            | Placement::LeftTop => VerticalAnchor::Top,
            Placement::RightCenter | Placement::LeftCenter => VerticalAnchor::Center,
            Placement::BottomLeft
            | Placement::BottomCenter
            | Placement::BottomRight
            | Placement::RightBottom
            | Placement::LeftBottom => VerticalAnchor::Bottom,
        }
    }

    /// Bottom-aligned groups grow toward the top of the viewport.
    #[must_use]
    pub fn stacks_upward(self) -> bool {
        self.vertical() == VerticalAnchor::Bottom
    }

    /// Swaps the left and right edges, keeping the vertical alignment.
    #[must_use]
    pub fn mirrored(self) -> Self {
        match self {
            Placement::TopLeft => Placement::TopRight,
            Placement::TopRight => Placement::TopLeft,
            Placement::BottomLeft => Placement::BottomRight,
            Placement::BottomRight => Placement::BottomLeft,
            Placement::RightTop => Placement::LeftTop,
            Placement::RightCenter => Placement::LeftCenter,
            Placement::RightBottom => Placement::LeftBottom,
            Placement::LeftTop => Placement::RightTop,
            Placement::LeftCenter => Placement::RightCenter,
            Placement::LeftBottom => Placement::RightBottom,
            Placement::TopCenter | Placement::BottomCenter => self,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Placement::TopLeft => "topLeft",
            Placement::TopCenter => "topCenter",
            Placement::TopRight => "topRight",
            Placement::RightTop => "rightTop",
            Placement::RightCenter => "rightCenter",
            Placement::RightBottom => "rightBottom",
            Placement::BottomLeft => "bottomLeft",
            Placement::BottomCenter => "bottomCenter",
            Placement::BottomRight => "bottomRight",
            Placement::LeftTop => "leftTop",
            Placement::LeftCenter => "leftCenter",
            Placement::LeftBottom => "leftBottom",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Placement::ALL
            .into_iter()
            .find(|placement| placement.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown placement: {s}"))
    }
}

/// How a notice enters and leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    #[default]
    Slide,
    Fade,
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationKind::Slide => f.write_str("slide"),
            AnimationKind::Fade => f.write_str("fade"),
        }
    }
}

impl FromStr for AnimationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slide" => Ok(AnimationKind::Slide),
            "fade" => Ok(AnimationKind::Fade),
            other => Err(format!("unknown animation: {other}")),
        }
    }
}
