//! Showcase theme system
//!
//! Two color schemes (light and dark), their design tokens, and the CSS custom
//! properties the rendered pages consume. The current scheme lives in a
//! [`ThemeState`] that the layout shell provides through context.

pub mod color;
pub mod theme;
pub mod tokens;

pub use color::Color;
pub use theme::{ColorScheme, ParseThemeError, ShowcaseTheme, ThemeState};
pub use tokens::{ColorTokens, GradientTokens, RadiusTokens, ShadowTokens};
