//! Application tuning loaded from `showcase.toml`
//!
//! Every section and field is optional:
//!
//! ```toml
//! [toast]
//! position = "bottom-left"
//! duration_ms = 5000
//!
//! [carousel]
//! autoplay = false
//!
//! [chatbot]
//! reply_delay_ms = 300
//!
//! [theme]
//! initial = "dark"
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use showcase_cn::{CarouselConfig, ChatbotConfig, ToastConfig};
use showcase_theme::ColorScheme;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub toast: ToastConfig,
    pub carousel: CarouselConfig,
    pub chatbot: ChatbotConfig,
    pub theme: ThemeConfig,
    pub site: SiteConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Scheme applied at startup
    pub initial: ColorScheme,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Year printed in the footer copyright line; omitted when unset
    pub copyright_year: Option<i32>,
}

impl AppConfig {
    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_cn::Corner;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml_str(
            r#"
            [toast]
            position = "bottom-left"

            [carousel]
            autoplay = false

            [theme]
            initial = "dark"

            [site]
            copyright_year = 2025
            "#,
        )
        .unwrap();
        assert_eq!(config.toast.position, Corner::BottomLeft);
        assert_eq!(config.toast.duration_ms, 3500);
        assert!(!config.carousel.autoplay);
        assert_eq!(config.carousel.interval_ms, 4000);
        assert_eq!(config.chatbot.reply_delay_ms, 700);
        assert_eq!(config.theme.initial, ColorScheme::Dark);
        assert_eq!(config.site.copyright_year, Some(2025));
    }

    #[test]
    fn test_bad_value_is_an_error() {
        assert!(AppConfig::from_toml_str("[toast]\nposition = \"middle\"").is_err());
    }
}
