// SPDX-License-Identifier: MPL-2.0
//! SVG icons used by toasts.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached in a `OnceLock`, so repeated renders reuse the parsed document.
//! Sources are single-color glyphs drawn in black; callers tint them with
//! [`tinted`] to follow the message type or the active theme.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    check_circle,
    "check_circle.svg",
    "Filled circle with a checkmark."
);
define_icon!(
    close_circle,
    "close_circle.svg",
    "Filled circle with a cross."
);
define_icon!(
    info_circle,
    "info_circle.svg",
    "Filled circle with a lowercase i."
);
define_icon!(
    warning,
    "warning.svg",
    "Triangle with an exclamation mark."
);
define_icon!(loading, "loading.svg", "Partial ring, spinner shape.");
define_icon!(cross, "close.svg", "Plain cross, used by close controls.");

/// Sets both dimensions of an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Paints an icon with a single color.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme, _status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_can_be_created_repeatedly() {
        for _ in 0..2 {
            let _ = check_circle();
            let _ = close_circle();
            let _ = info_circle();
            let _ = warning();
            let _ = loading();
            let _ = cross();
        }
    }

    #[test]
    fn sized_and_tinted_compose() {
        let _ = tinted(sized(cross(), 16.0), Color::WHITE);
    }
}
