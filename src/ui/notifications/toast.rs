// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notices.
//!
//! Toasts are small cards with a type-colored accent, an icon, the message text
//! and an optional close control. Each toast is pinned at its resting position
//! plus the transform of its current animation; opacity is applied to every
//! color of the card.
//!
//! Cards sit inside a sensor, so the rendered size flows back to the manager
//! as [`Message::Measured`] and replaces the estimate used for stacking.

use super::content::NoticeContent;
use super::manager::{Manager, Message};
use super::notice::{Key, Metrics, Notice, Style};
use crate::i18n::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, mouse_area, pin, sensor, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Shadow, Size, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single notice at its animated position.
    ///
    /// `group` is the style of the notice's group; margins reported with the
    /// measured size come from the notice style merged over it.
    pub fn view<'a>(
        notice: &Notice,
        group: &Style,
        i18n: &I18n,
        scheme: &ColorScheme,
        now: Instant,
    ) -> Element<'a, Message> {
        let transform = notice.transform(now);
        let alpha = transform.opacity.clamp(0.0, 1.0);
        let content = notice.content();
        let accent = content.kind.color(scheme);
        let text_color = faded(scheme.text_primary, alpha);

        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        if let Some(icon) = content.icon_widget() {
            let icon = icons::tinted(icons::sized(icon, sizing::ICON_MD), faded(accent, alpha));
            row = row.push(Container::new(icon).padding(spacing::XXS));
        }

        let message = Text::new(content.body.resolve(i18n))
            .size(typography::BODY)
            .line_height(typography::LINE_HEIGHT)
            .color(text_color);
        row = row.push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

        if notice.closable() {
            let close = button(icons::tinted(
                icons::sized(icons::cross(), sizing::ICON_SM),
                text_color,
            ))
            .on_press(Message::Close(notice.key().clone()))
            .padding(spacing::XXS)
            .style(close_button_style);
            row = row.push(close);
        }

        let bounds = notice.bounds();
        let width = if bounds.width > 0.0 {
            bounds.width
        } else {
            sizing::TOAST_WIDTH
        };
        let surface = scheme.surface_primary;
        let card = Container::new(row)
            .width(Length::Fixed(width))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(surface, accent, alpha));

        let body: Element<'a, Message> = if notice.has_click_handler() {
            mouse_area(card)
                .on_press(Message::Clicked(notice.key().clone()))
                .into()
        } else {
            card.into()
        };

        let style = notice.style().merged_over(*group);
        let report = Self::measured(notice.user_key().clone(), &style);
        let body = sensor(body).on_show(report.clone()).on_resize(report);

        let position = bounds.position() + transform.resolve(bounds.size());
        pin(body).x(position.x).y(position.y).into()
    }

    /// Renders every live notice on a full-size layer.
    ///
    /// Place the result on top of the application content, e.g. in a `Stack`.
    pub fn view_overlay<'a>(
        manager: &Manager,
        i18n: &I18n,
        scheme: &ColorScheme,
        now: Instant,
    ) -> Element<'a, Message> {
        let layers: Vec<Element<'a, Message>> = manager
            .notices()
            .map(|notice| Self::view(notice, &manager.options().style, i18n, scheme, now))
            .collect();

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Turns a rendered toast size into a measurement for `key`.
    #[must_use]
    pub fn measured(key: Key, style: &Style) -> impl Fn(Size) -> Message + Clone + 'static {
        let top = style.margin_top.unwrap_or(0.0);
        let bottom = style.margin_bottom.unwrap_or(0.0);
        move |size| {
            Message::Measured(
                key.clone(),
                Metrics::new(size.width, size.height).with_margins(top, bottom),
            )
        }
    }

    /// Size of a toast before it has been measured.
    ///
    /// Text is wrapped with an average glyph width, which is close enough for
    /// stacking until the host reports the rendered size.
    #[must_use]
    pub fn estimate_metrics(content: &NoticeContent, style: &Style) -> Metrics {
        let width = style.width.unwrap_or(sizing::TOAST_WIDTH);
        let chrome = 2.0 * spacing::SM
            + sizing::ICON_MD
            + 2.0 * spacing::XXS
            + sizing::ICON_SM
            + 2.0 * spacing::XXS
            + 2.0 * spacing::SM;
        let text_width = (width - chrome).max(typography::BODY);
        let glyph_width = typography::BODY * typography::AVERAGE_GLYPH_WIDTH;
        let chars_per_line = (text_width / glyph_width).floor().max(1.0);

        #[allow(clippy::cast_precision_loss)]
        let chars = content.body.approximate_len() as f32;
        let lines = (chars / chars_per_line).ceil().max(1.0);
        let text_height = lines * typography::BODY * typography::LINE_HEIGHT;
        let height = (text_height + 2.0 * spacing::SM).max(sizing::TOAST_MIN_HEIGHT);

        Metrics::new(width, height).with_margins(
            style.margin_top.unwrap_or(0.0),
            style.margin_bottom.unwrap_or(0.0),
        )
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(surface: Color, accent: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(faded(
            Color {
                a: opacity::SURFACE,
                ..surface
            },
            alpha,
        ))),
        border: iced::Border {
            color: faded(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: faded(
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..shadow::MD.color
                },
                alpha,
            ),
            ..shadow::MD
        },
        ..Default::default()
    }
}

/// Style function for the close control.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |a: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::content::MessageType;

    #[test]
    fn container_style_uses_accent_and_fades() {
        let style = toast_container_style(palette::WHITE, palette::SUCCESS_500, 0.5);

        assert_eq!(style.border.color.r, palette::SUCCESS_500.r);
        assert!((style.border.color.a - 0.5).abs() < f32::EPSILON);
        assert!(style.background.is_some());
    }

    #[test]
    fn short_text_uses_minimum_height() {
        let metrics = Toast::estimate_metrics(
            &NoticeContent::new(MessageType::Info, "Saved"),
            &Style::default(),
        );
        assert_eq!(metrics.width, sizing::TOAST_WIDTH);
        assert_eq!(metrics.height, sizing::TOAST_MIN_HEIGHT);
    }

    #[test]
    fn long_text_wraps_to_taller_toast() {
        let long = "word ".repeat(60);
        let metrics = Toast::estimate_metrics(
            &NoticeContent::new(MessageType::Info, long),
            &Style {
                margin_bottom: Some(6.0),
                ..Style::default()
            },
        );
        assert!(metrics.height > sizing::TOAST_MIN_HEIGHT);
        assert_eq!(metrics.margin_bottom, 6.0);
    }

    #[test]
    fn wider_style_fits_more_text() {
        let text = "a fairly long notification message that wraps ".repeat(3);
        let content = NoticeContent::new(MessageType::Info, text);
        let narrow = Toast::estimate_metrics(&content, &Style::default());
        let wide = Toast::estimate_metrics(
            &content,
            &Style {
                width: Some(640.0),
                ..Style::default()
            },
        );
        assert!(wide.height <= narrow.height);
        assert_eq!(wide.width, 640.0);
    }

    #[test]
    fn rendered_size_carries_style_margins() {
        let report = Toast::measured(
            Key::from("saved"),
            &Style {
                margin_top: Some(4.0),
                ..Style::top(8.0)
            },
        );
        assert_eq!(
            report(Size::new(320.0, 72.0)),
            Message::Measured(
                Key::from("saved"),
                Metrics::new(320.0, 72.0).with_margins(4.0, 0.0)
            )
        );
    }

    #[test]
    fn close_button_is_transparent_at_rest() {
        let style = close_button_style(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_none());
        let hovered = close_button_style(&Theme::Dark, button::Status::Hovered);
        assert!(hovered.background.is_some());
    }
}
