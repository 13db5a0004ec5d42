//! `showcase.toml` handling
//!
//! The file is optional. An explicit `--config` path must exist; otherwise
//! `showcase.toml` in the working directory is used when present.

use anyhow::{Context, Result};
use showcase_app::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "showcase.toml";

/// Load the application config
pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(AppConfig::default());
            }
            default
        }
    };
    load_file(&path)
}

pub fn load_file(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = AppConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_theme::ColorScheme;

    fn scratch(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("showcase-cli-{}-{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_file() {
        let path = scratch("ok.toml", "[theme]\ninitial = \"dark\"\n");
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.theme.initial, ColorScheme::Dark);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_errors_name_the_file() {
        let path = scratch("bad.toml", "[toast]\nduration_ms = \"soon\"\n");
        let err = load(Some(&path)).unwrap_err();
        assert!(format!("{err}").starts_with("Failed to parse"));
        fs::remove_file(path).ok();

        let missing = Path::new("/definitely/not/here/showcase.toml");
        assert!(format!("{}", load(Some(missing)).unwrap_err()).starts_with("Failed to read"));
    }
}
