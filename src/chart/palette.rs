//! Chart colors
//!
//! Theme only affects label text and the line-chart accent; every other
//! chart color is fixed.

use super::surface::Color;
use crate::session::Theme;

pub const ACCENT_DARK: Color = Color::hex(0xa361ff);
pub const ACCENT_LIGHT: Color = Color::hex(0x4a35a5);

pub const TEXT_DARK: Color = Color::hex(0xffffff);
pub const TEXT_LIGHT: Color = Color::hex(0x121212);

pub const TEAL: Color = Color::hex(0x1cd4af);
pub const UP: Color = Color::hex(0x1cd44d);
pub const DOWN: Color = Color::hex(0xe11d48);

pub const VIOLET: Color = Color::hex(0x6e56cf);
pub const PURPLE: Color = Color::hex(0xa361ff);
pub const BLUE: Color = Color::hex(0x426ff6);
pub const PERIWINKLE: Color = Color::hex(0x8a8aff);
pub const GREEN: Color = Color::hex(0x1cd44d);
pub const ORANGE: Color = Color::hex(0xf97316);

/// Cycled by index for categorical bars
pub const CATEGORY_PALETTE: [Color; 5] = [VIOLET, PURPLE, BLUE, TEAL, PERIWINKLE];

pub fn text_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => TEXT_DARK,
        Theme::Light => TEXT_LIGHT,
    }
}

pub fn accent_color(theme: Theme) -> Color {
    match theme {
        Theme::Dark => ACCENT_DARK,
        Theme::Light => ACCENT_LIGHT,
    }
}
