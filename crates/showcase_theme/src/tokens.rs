//! Design tokens

use crate::color::Color;

/// Semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    // Brand
    pub primary: Color,
    pub primary_hover: Color,
    pub secondary: Color,

    // Semantic
    pub success: Color,
    pub success_bg: Color,
    pub warning: Color,
    pub warning_bg: Color,
    pub error: Color,
    pub error_bg: Color,
    pub info: Color,
    pub info_bg: Color,

    // Surfaces
    pub background: Color,
    pub surface: Color,
    pub surface_elevated: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_inverse: Color,

    // Borders
    pub border: Color,
    pub border_focus: Color,
}

/// Corner radii in rem
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTokens {
    pub radius_sm: f32,
    pub radius_md: f32,
    pub radius_lg: f32,
    pub radius_xl: f32,
    pub radius_2xl: f32,
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_sm: 0.5,
            radius_md: 0.625,
            radius_lg: 0.75,
            radius_xl: 0.875,
            radius_2xl: 1.0,
        }
    }
}

/// Box shadows as CSS values
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowTokens {
    pub hairline: &'static str,
    pub soft: &'static str,
    pub card: &'static str,
    pub floating: &'static str,
}

impl ShadowTokens {
    pub fn light() -> Self {
        Self {
            hairline: "0 0 0 1px rgba(0,0,0,0.04)",
            soft: "0 1px 2px rgba(0,0,0,0.04), 0 1px 3px rgba(0,0,0,0.06)",
            card: "0 10px 15px -3px rgba(0,0,0,0.1), 0 4px 6px -2px rgba(0,0,0,0.05)",
            floating: "0 12px 24px -8px rgba(2,6,23,0.15)",
        }
    }

    pub fn dark() -> Self {
        Self {
            hairline: "0 0 0 1px rgba(255,255,255,0.06)",
            soft: "0 1px 2px rgba(0,0,0,0.3), 0 1px 3px rgba(0,0,0,0.4)",
            card: "0 10px 15px -3px rgba(0,0,0,0.5), 0 4px 6px -2px rgba(0,0,0,0.3)",
            floating: "0 12px 24px -8px rgba(0,0,0,0.6)",
        }
    }
}

/// Background gradients as CSS values
#[derive(Clone, Debug, PartialEq)]
pub struct GradientTokens {
    pub brand: &'static str,
    pub app: String,
}
