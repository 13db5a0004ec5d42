//! Token colors

use std::fmt;

/// sRGB color as it appears in stylesheets
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Opacity in `0.0..=1.0`
    pub opacity: f32,
}

impl Color {
    pub const WHITE: Color = Color::opaque(0xFF, 0xFF, 0xFF);

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            opacity: 1.0,
        }
    }

    /// From a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        let [_, red, green, blue] = hex.to_be_bytes();
        Self::opaque(red, green, blue)
    }

    pub fn with_alpha(self, opacity: f32) -> Self {
        Self {
            opacity: opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    /// `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Color {
            red,
            green,
            blue,
            opacity,
        } = *self;
        if opacity >= 1.0 {
            write!(f, "#{red:02x}{green:02x}{blue:02x}")
        } else {
            let opacity = (opacity * 100.0).round() / 100.0;
            write!(f, "rgba({red}, {green}, {blue}, {opacity})")
        }
    }
}
