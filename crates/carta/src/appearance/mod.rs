//! Theme and appearance module for Carta
//!
//! Contains the color palette, layout constants, and styling utilities
//! shared by every screen and widget.

pub mod button;

use iced::Color;
use std::sync::LazyLock;

// Layout constants
pub const CORNER_RADIUS: f32 = 8.0;
pub const CORNER_RADIUS_SMALL: f32 = 6.0;
pub const CORNER_RADIUS_LARGE: f32 = 12.0;
pub const SPACING: u16 = 8;
pub const SPACING_LARGE: u16 = 16;
pub const PADDING: u16 = 12;
pub const PADDING_LARGE: u16 = 20;

/// Color palette for the application theme
#[derive(Debug, Clone)]
pub struct Palette {
    // Backgrounds
    pub background: Color,
    pub surface: Color,
    pub card: Color,
    pub card_hover: Color,
    pub input: Color,

    // Text
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Borders
    pub border: Color,
    pub border_hover: Color,

    // Accent colors
    pub accent: Color,
    pub accent_light: Color,

    // Danger/error colors (failed fetches, invalid input)
    pub danger: Color,
    pub danger_light: Color,

    // Success colors (open badge, completed upload)
    pub success: Color,
    pub success_light: Color,
}

/// Light palette (gray scale + green accent)
pub static LIGHT: LazyLock<Palette> = LazyLock::new(|| Palette {
    // Backgrounds - gray scale over white
    background: Color::from_rgb(0.973, 0.98, 0.988), // blue-gray-50 #f8fafc
    surface: Color::WHITE,
    card: Color::from_rgb(0.98, 0.98, 0.984), // gray-50 #fafafa
    card_hover: Color::from_rgb(0.957, 0.957, 0.961), // gray-100
    input: Color::WHITE,

    // Text - gray scale
    text: Color::from_rgb(0.122, 0.161, 0.216), // gray-800 #1f2937
    text_secondary: Color::from_rgb(0.294, 0.333, 0.388), // gray-600 #4b5563
    text_muted: Color::from_rgb(0.612, 0.639, 0.686), // gray-400 #9ca3af

    // Borders
    border: Color::from_rgb(0.898, 0.906, 0.922), // gray-200 #e5e7eb
    border_hover: Color::from_rgb(0.133, 0.773, 0.369), // green-500 #22c55e

    // Accent - green scale
    accent: Color::from_rgb(0.086, 0.639, 0.29), // green-600 #16a34a
    accent_light: Color::from_rgb(0.863, 0.988, 0.906), // green-100 #dcfce7

    // Danger - red scale
    danger: Color::from_rgb(0.863, 0.149, 0.149), // red-600 #dc2626
    danger_light: Color::from_rgb(0.996, 0.886, 0.886), // red-100

    // Success - green scale (shared with the accent family)
    success: Color::from_rgb(0.086, 0.639, 0.29), // green-600
    success_light: Color::from_rgb(0.863, 0.988, 0.906), // green-100
});

/// The active palette. Carta ships a single light theme.
pub fn palette() -> &'static Palette {
    &LIGHT
}

// Color utility functions

/// Lighten a color by the specified amount (0.0 - 1.0)
pub fn lighten(color: Color, amount: f32) -> Color {
    Color {
        r: (color.r + amount).min(1.0),
        g: (color.g + amount).min(1.0),
        b: (color.b + amount).min(1.0),
        a: color.a,
    }
}

/// Darken a color by the specified amount (0.0 - 1.0)
pub fn darken(color: Color, amount: f32) -> Color {
    Color {
        r: (color.r - amount).max(0.0),
        g: (color.g - amount).max(0.0),
        b: (color.b - amount).max(0.0),
        a: color.a,
    }
}

/// Replace a color's alpha channel
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}
