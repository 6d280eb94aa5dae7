// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the elements of the toast surface.
//!
//! Each toast is a card with a severity-colored accent stripe, the severity
//! glyph, a title line, the message and a close button. Entering and leaving
//! toasts are drawn translucent, mirroring the slide-in/out transition.

use super::manager::{Manager, Message};
use super::surface::{Phase, ToastElement};
use crate::timing::Clock;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(element: &ToastElement) -> Element<'_, Message> {
        let accent_color = element.severity().color();
        let alpha = phase_alpha(element.phase());

        let icon_widget = Text::new(element.severity().glyph().to_string())
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..accent_color
                }),
            });

        let title_widget = Text::new(element.title())
            .size(typography::TITLE_SM)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            });

        let message_widget = Text::new(element.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            });

        let dismiss_button = button(Text::new("×").size(sizing::ICON_SM))
            .on_press(Message::Dismiss(element.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [title / message] [close]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(title_widget)
                        .push(message_widget),
                )
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha))
            .into()
    }

    /// Renders the toast container with every toast on the surface.
    ///
    /// Toasts are stacked in the top-right corner, oldest on top.
    pub fn view_overlay<C: Clock>(manager: &Manager<C>) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager.visible().map(Self::view).collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }
}

fn phase_alpha(phase: Phase) -> f32 {
    match phase {
        Phase::Shown => opacity::OPAQUE,
        Phase::Entering | Phase::Leaving => opacity::OVERLAY_MEDIUM,
    }
}

/// Style function for the toast card.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..bg_color })),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_ACCENT,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the close button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |alpha: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
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
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
