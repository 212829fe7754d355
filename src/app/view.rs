// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::i18n::I18n;
use crate::message::{MessageApi, MessageType};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{AnimationKind, Placement};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, pick_list, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

const ANIMATIONS: [AnimationKind; 2] = [AnimationKind::Slide, AnimationKind::Fade];

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub messages: &'a MessageApi,
    pub placement: Placement,
    pub animation: AnimationKind,
    pub event_count: usize,
    pub now: Instant,
}

/// Renders the controls with the message overlay stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let overlay = ctx
        .messages
        .view(ctx.i18n, ctx.colors, ctx.now)
        .map(Message::Notification);

    Stack::new()
        .push(view_controls(&ctx))
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let label = |key: &str| Text::new(i18n.tr(key)).size(typography::BODY);

    let typed = Row::new()
        .spacing(spacing::SM)
        .push(button(label("demo-button-success")).on_press(Message::Show(MessageType::Success)))
        .push(button(label("demo-button-error")).on_press(Message::Show(MessageType::Error)))
        .push(button(label("demo-button-info")).on_press(Message::Show(MessageType::Info)))
        .push(button(label("demo-button-warning")).on_press(Message::Show(MessageType::Warning)));

    let lifecycle = Row::new()
        .spacing(spacing::SM)
        .push(button(label("demo-button-loading")).on_press(Message::StartLoading))
        .push(button(label("demo-button-persistent")).on_press(Message::TogglePersistent))
        .push(button(label("demo-button-destroy")).on_press(Message::DestroyAll));

    let options = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(label("demo-placement-label"))
        .push(pick_list(
            Placement::ALL,
            Some(ctx.placement),
            Message::PlacementSelected,
        ))
        .push(label("demo-animation-label"))
        .push(pick_list(
            ANIMATIONS,
            Some(ctx.animation),
            Message::AnimationSelected,
        ))
        .push(button(label("demo-theme-label")).on_press(Message::CycleTheme));

    let events = Text::new(i18n.tr_with_args(
        "demo-events",
        &[("count", ctx.event_count.to_string().as_str())],
    ))
    .size(typography::CAPTION);

    let column = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("demo-heading")).size(typography::TITLE_MD))
        .push(typed)
        .push(lifecycle)
        .push(options)
        .push(events);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
