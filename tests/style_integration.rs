// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced_message::message::MessageType;
    use iced_message::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_message::ui::notifications::{NoticeContent, Style, Toast};
    use iced_message::ui::theming::{ColorScheme, ThemeMode, ThemeProvider};

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        let _ = sizing::TOAST_WIDTH;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ThemeProvider::new(ThemeMode::Light);
        let dark = ThemeProvider::new(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.colors().surface_primary.r > dark.colors().surface_primary.r);
        assert!(light.colors().text_primary.r < dark.colors().text_primary.r);
    }

    #[test]
    fn message_types_have_distinct_accents() {
        let scheme = ColorScheme::light();
        let accents = [
            MessageType::Success,
            MessageType::Error,
            MessageType::Info,
            MessageType::Warning,
        ]
        .map(|kind| kind.color(&scheme));

        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(MessageType::Loading.color(&scheme), scheme.brand_primary);
    }

    #[test]
    fn estimated_toast_respects_style_width() {
        let metrics = Toast::estimate_metrics(
            &NoticeContent::new(MessageType::Success, "Saved"),
            &Style {
                width: Some(400.0),
                ..Style::default()
            },
        );
        assert_eq!(metrics.width, 400.0);
        assert!(metrics.height >= sizing::TOAST_MIN_HEIGHT);
    }
}
