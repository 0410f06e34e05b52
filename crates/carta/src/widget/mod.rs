//! Reusable widget builders for Carta
//!
//! Generic widget functions that accept a palette for theming consistency.

pub mod icon;
pub mod restaurant_card;

pub use icon::icon;
pub use restaurant_card::restaurant_card;

use crate::appearance::{
    CORNER_RADIUS, CORNER_RADIUS_LARGE, PADDING_LARGE, Palette, button::ButtonStyle, palette,
};
use iced::border::Radius;
use iced::widget::{button, container, row, text, text_input};
use iced::{Background, Border, Color, Element, Font, Length, Shadow, Theme, Vector};
use lucide_icons::Icon;

/// Fixed height for page headers to ensure consistent spacing across all screens
pub const PAGE_HEADER_HEIGHT: f32 = 40.0;

/// Spinner animation frames (braille pattern)
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Returns the current spinner character for the given frame
pub fn spinner_char(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Renders an animated spinner element
pub fn spinner<'a, Message: 'a>(frame: usize, palette: &'a Palette) -> Element<'a, Message> {
    text(spinner_char(frame))
        .size(14)
        .color(palette.accent)
        .font(Font::MONOSPACE)
        .into()
}

/// Centered spinner filling the available area, for whole-screen loading
pub fn loading_pane<'a, Message: 'a>(frame: usize, palette: &'a Palette) -> Element<'a, Message> {
    container(
        text(spinner_char(frame))
            .size(28)
            .color(palette.accent)
            .font(Font::MONOSPACE),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// Card container with shadow and border
///
/// Creates a styled container with padding, rounded corners, border, and
/// shadow. Used for main content areas.
pub fn card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    palette: &Palette,
) -> Element<'a, Message> {
    let bg = palette.surface;
    let border_color = palette.border;

    container(content)
        .padding(PADDING_LARGE)
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: Radius::from(CORNER_RADIUS_LARGE),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}

/// Back navigation button (arrow + label, ghost styling)
pub fn back_button<Message: Clone + 'static>(
    label: &'static str,
    msg: Message,
    palette: &Palette,
) -> Element<'static, Message> {
    let content = row![
        icon(Icon::ArrowLeft).size(14).color(palette.accent),
        text(label).size(14),
    ]
    .spacing(6)
    .align_y(iced::Alignment::Center);

    button(content)
        .on_press(msg)
        .padding([6, 10])
        .style(ButtonStyle::Ghost.style_fn())
        .into()
}

/// Text input with Carta's standard styling (border accents on focus)
pub fn styled_input<'a, Message: Clone + 'a>(
    placeholder: &'a str,
    value: &'a str,
) -> text_input::TextInput<'a, Message> {
    text_input(placeholder, value)
        .padding(12)
        .size(14)
        .style(|_: &Theme, status| {
            let p = palette();
            let border_color = match status {
                text_input::Status::Focused => p.accent,
                text_input::Status::Hovered => p.border_hover,
                _ => p.border,
            };
            text_input::Style {
                background: Background::Color(p.input),
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: Radius::from(CORNER_RADIUS),
                },
                icon: p.text_muted,
                placeholder: p.text_muted,
                value: p.text,
                selection: p.accent_light,
            }
        })
}

/// Page header with consistent styling
///
/// Fixed height keeps spacing identical across all screens.
pub fn page_header_simple<'a, Message: 'a>(
    title: &'a str,
    palette: &Palette,
) -> Element<'a, Message> {
    let title_text = text(title)
        .size(24)
        .color(palette.text)
        .font(Font::MONOSPACE);

    container(row![title_text].align_y(iced::Alignment::Center))
        .height(Length::Fixed(PAGE_HEADER_HEIGHT))
        .width(Length::Fill)
        .into()
}
