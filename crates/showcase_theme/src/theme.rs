//! Color schemes, the theme bundle and the shared theme state

use crate::color::Color;
use crate::tokens::{ColorTokens, GradientTokens, RadiusTokens, ShadowTokens};
use serde::{Deserialize, Serialize};
use showcase_core::{ShowcaseRuntime, Signal, State};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Value written to the document's `data-theme` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color scheme `{0}` (expected `light` or `dark`)")]
pub struct ParseThemeError(pub String);

impl FromStr for ColorScheme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// All tokens for one color scheme
#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseTheme {
    scheme: ColorScheme,
    colors: ColorTokens,
    radii: RadiusTokens,
    shadows: ShadowTokens,
    gradients: GradientTokens,
}

const BRAND_GRADIENT: &str = "linear-gradient(45deg, #af2497 10%, #902d9a 20%, #1840a0 100%)";

impl ShowcaseTheme {
    /// Create the light variant
    pub fn light() -> Self {
        let background = Color::from_hex(0xF9FAFB);
        Self {
            scheme: ColorScheme::Light,
            colors: ColorTokens {
                primary: Color::from_hex(0x2563EB),
                primary_hover: Color::from_hex(0x1D4ED8),
                secondary: Color::from_hex(0xF59E0B),
                success: Color::from_hex(0x22C55E),
                success_bg: Color::from_hex(0x22C55E).with_alpha(0.1),
                warning: Color::from_hex(0xF59E0B),
                warning_bg: Color::from_hex(0xF59E0B).with_alpha(0.1),
                error: Color::from_hex(0xEF4444),
                error_bg: Color::from_hex(0xEF4444).with_alpha(0.1),
                info: Color::from_hex(0x0EA5E9),
                info_bg: Color::from_hex(0x0EA5E9).with_alpha(0.1),
                background,
                surface: Color::WHITE,
                surface_elevated: Color::from_hex(0xF3F4F6),
                text_primary: Color::from_hex(0x111827),
                text_secondary: Color::from_hex(0x4B5563),
                text_inverse: Color::WHITE,
                border: Color::from_hex(0xE5E7EB),
                border_focus: Color::from_hex(0x2563EB),
            },
            radii: RadiusTokens::default(),
            shadows: ShadowTokens::light(),
            gradients: GradientTokens {
                brand: BRAND_GRADIENT,
                app: format!(
                    "linear-gradient(to right, rgba(59,130,246,0.1), {})",
                    background.to_css()
                ),
            },
        }
    }

    /// Create the dark variant
    pub fn dark() -> Self {
        let background = Color::from_hex(0x0B1120);
        Self {
            scheme: ColorScheme::Dark,
            colors: ColorTokens {
                primary: Color::from_hex(0x3B82F6),
                primary_hover: Color::from_hex(0x60A5FA),
                secondary: Color::from_hex(0xFBBF24),
                success: Color::from_hex(0x4ADE80),
                success_bg: Color::from_hex(0x4ADE80).with_alpha(0.15),
                warning: Color::from_hex(0xFBBF24),
                warning_bg: Color::from_hex(0xFBBF24).with_alpha(0.15),
                error: Color::from_hex(0xF87171),
                error_bg: Color::from_hex(0xF87171).with_alpha(0.15),
                info: Color::from_hex(0x38BDF8),
                info_bg: Color::from_hex(0x38BDF8).with_alpha(0.15),
                background,
                surface: Color::from_hex(0x111827),
                surface_elevated: Color::from_hex(0x1F2937),
                text_primary: Color::from_hex(0xF9FAFB),
                text_secondary: Color::from_hex(0x9CA3AF),
                text_inverse: Color::from_hex(0x111827),
                border: Color::from_hex(0x374151),
                border_focus: Color::from_hex(0x60A5FA),
            },
            radii: RadiusTokens::default(),
            shadows: ShadowTokens::dark(),
            gradients: GradientTokens {
                brand: BRAND_GRADIENT,
                app: format!(
                    "linear-gradient(to right, rgba(59,130,246,0.15), {})",
                    background.to_css()
                ),
            },
        }
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    pub fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    pub fn shadows(&self) -> &ShadowTokens {
        &self.shadows
    }

    pub fn gradients(&self) -> &GradientTokens {
        &self.gradients
    }

    /// Custom properties for this theme, in declaration order
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        let c = &self.colors;
        let r = &self.radii;
        let s = &self.shadows;
        vec![
            ("--color-primary", c.primary.to_css()),
            ("--color-primary-hover", c.primary_hover.to_css()),
            ("--color-secondary", c.secondary.to_css()),
            ("--color-success", c.success.to_css()),
            ("--color-success-bg", c.success_bg.to_css()),
            ("--color-warning", c.warning.to_css()),
            ("--color-warning-bg", c.warning_bg.to_css()),
            ("--color-error", c.error.to_css()),
            ("--color-error-bg", c.error_bg.to_css()),
            ("--color-info", c.info.to_css()),
            ("--color-info-bg", c.info_bg.to_css()),
            ("--color-background", c.background.to_css()),
            ("--color-surface", c.surface.to_css()),
            ("--color-surface-elevated", c.surface_elevated.to_css()),
            ("--color-text", c.text_primary.to_css()),
            ("--color-text-secondary", c.text_secondary.to_css()),
            ("--color-text-inverse", c.text_inverse.to_css()),
            ("--color-border", c.border.to_css()),
            ("--color-border-focus", c.border_focus.to_css()),
            ("--radius-sm", format!("{}rem", r.radius_sm)),
            ("--radius-md", format!("{}rem", r.radius_md)),
            ("--radius-lg", format!("{}rem", r.radius_lg)),
            ("--radius-xl", format!("{}rem", r.radius_xl)),
            ("--radius-2xl", format!("{}rem", r.radius_2xl)),
            ("--shadow-hairline", s.hairline.to_string()),
            ("--shadow-soft", s.soft.to_string()),
            ("--shadow-card", s.card.to_string()),
            ("--shadow-floating", s.floating.to_string()),
            ("--gradient-brand", self.gradients.brand.to_string()),
            ("--gradient-app", self.gradients.app.clone()),
        ]
    }

    /// A `[data-theme="..."]` rule block declaring every custom property
    pub fn to_css_block(&self) -> String {
        let mut css = format!("[data-theme=\"{}\"] {{\n", self.scheme);
        for (name, value) in self.css_variables() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push('}');
        css
    }
}

impl Default for ShowcaseTheme {
    fn default() -> Self {
        Self::light()
    }
}

/// The application's current color scheme
///
/// Owned by the layout shell and handed to descendants through context.
#[derive(Clone, Debug)]
pub struct ThemeState {
    scheme: State<ColorScheme>,
}

impl ThemeState {
    pub fn new(runtime: &ShowcaseRuntime, initial: ColorScheme) -> Self {
        Self {
            scheme: runtime.use_state(initial),
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme.get()
    }

    pub fn theme(&self) -> ShowcaseTheme {
        ShowcaseTheme::for_scheme(self.scheme())
    }

    pub fn set(&self, scheme: ColorScheme) {
        tracing::debug!(%scheme, "color scheme set");
        self.scheme.set_rebuild(scheme);
    }

    /// Flip between light and dark, returning the new scheme
    pub fn toggle(&self) -> ColorScheme {
        let next = self.scheme().toggled();
        self.set(next);
        next
    }

    /// Signal for effects that track the scheme
    pub fn signal(&self) -> Signal<ColorScheme> {
        self.scheme.signal()
    }

    /// Label for the toggle control: the action it will perform
    pub fn toggle_label(&self) -> &'static str {
        match self.scheme() {
            ColorScheme::Light => "Switch to dark mode",
            ColorScheme::Dark => "Switch to light mode",
        }
    }
}
