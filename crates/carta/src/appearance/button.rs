//! Button style variants for Carta
//!
//! Provides button style functions for the visual variants the screens use.

use iced::widget::button;
use iced::{Background, Border, Color, Theme};

use super::{CORNER_RADIUS, CORNER_RADIUS_SMALL, darken, palette, with_alpha};

/// Button style variants
#[derive(Debug, Clone, Copy, Default)]
pub enum ButtonStyle {
    /// Primary action button (filled with accent color)
    #[default]
    Primary,
    /// Ghost button (transparent background)
    Ghost,
    /// Card-style button (used for clickable cards)
    Card,
}

impl ButtonStyle {
    /// Returns a style function for use with button::style()
    pub fn style_fn(self) -> impl Fn(&Theme, button::Status) -> button::Style {
        move |_theme, status| self.style(status)
    }

    /// Get the button style for the given status
    pub fn style(self, status: button::Status) -> button::Style {
        let p = palette();

        match self {
            ButtonStyle::Primary => {
                let bg = match status {
                    button::Status::Active => p.accent,
                    button::Status::Hovered => darken(p.accent, 0.05),
                    button::Status::Pressed => darken(p.accent, 0.1),
                    button::Status::Disabled => with_alpha(p.accent, 0.4),
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: Color::WHITE,
                    border: Border {
                        radius: CORNER_RADIUS.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            }

            ButtonStyle::Ghost => {
                let bg = match status {
                    button::Status::Hovered => p.card_hover,
                    button::Status::Pressed => p.card,
                    _ => Color::TRANSPARENT,
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: p.accent,
                    border: Border {
                        radius: CORNER_RADIUS_SMALL.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            }

            ButtonStyle::Card => {
                let (bg, border) = match status {
                    button::Status::Hovered => (p.card_hover, p.border_hover),
                    button::Status::Pressed => (p.card, p.accent),
                    button::Status::Active => (p.surface, p.border),
                    button::Status::Disabled => (with_alpha(p.surface, 0.5), p.border),
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: p.text,
                    border: Border {
                        color: border,
                        width: 1.0,
                        radius: CORNER_RADIUS.into(),
                    },
                    ..Default::default()
                }
            }
        }
    }
}
