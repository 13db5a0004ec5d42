//! Environment configuration
//!
//! Every setting comes from an optional `SHOWCASE_*` variable. Resolution is total:
//! blank or unparseable values fall back to their defaults (with a warning where a
//! value was present but rejected), so startup never fails on the environment.

use crate::error::{AppError, Result};
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_WS_URL: &str = "ws://localhost:3001";
pub const DEFAULT_NODE_ENV: &str = "development";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_HEALTHCHECK_PATH: &str = "/healthz";

/// Flag name answered by the experiments switch instead of the flag map
pub const EXPERIMENTS_FLAG: &str = "experimentsEnabled";

/// Resolved environment
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnvConfig {
    pub node_env: String,
    pub api_base: String,
    pub backend_url: String,
    pub frontend_url: String,
    pub ws_url: String,
    pub telemetry_disabled: bool,
    pub enable_source_maps: bool,
    pub port: u16,
    pub trust_proxy: bool,
    pub log_level: String,
    pub healthcheck_path: String,
    pub feature_flags: IndexMap<String, Value>,
    pub experiments_enabled: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            node_env: DEFAULT_NODE_ENV.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            ws_url: DEFAULT_WS_URL.to_string(),
            telemetry_disabled: true,
            enable_source_maps: true,
            port: DEFAULT_PORT,
            trust_proxy: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            healthcheck_path: DEFAULT_HEALTHCHECK_PATH.to_string(),
            feature_flags: IndexMap::new(),
            experiments_enabled: false,
        }
    }
}

impl EnvConfig {
    /// Resolve from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve from an explicit variable map
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        Self::from_lookup(|name| vars.get(name).cloned())
    }

    /// Resolve using `lookup` to read variables
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let node_env = var("SHOWCASE_NODE_ENV")
            .or_else(|| var("NODE_ENV"))
            .unwrap_or(d.node_env)
            .to_lowercase();

        Self {
            node_env,
            api_base: normalize_url(var("SHOWCASE_API_BASE").as_deref(), &d.api_base),
            backend_url: normalize_url(var("SHOWCASE_BACKEND_URL").as_deref(), &d.backend_url),
            frontend_url: normalize_url(var("SHOWCASE_FRONTEND_URL").as_deref(), &d.frontend_url),
            ws_url: normalize_url(var("SHOWCASE_WS_URL").as_deref(), &d.ws_url),
            telemetry_disabled: parse_bool(
                var("SHOWCASE_TELEMETRY_DISABLED").as_deref(),
                d.telemetry_disabled,
            ),
            enable_source_maps: parse_bool(
                var("SHOWCASE_ENABLE_SOURCE_MAPS").as_deref(),
                d.enable_source_maps,
            ),
            port: parse_port(var("SHOWCASE_PORT").as_deref(), d.port),
            trust_proxy: parse_bool(var("SHOWCASE_TRUST_PROXY").as_deref(), d.trust_proxy),
            log_level: var("SHOWCASE_LOG_LEVEL")
                .unwrap_or(d.log_level)
                .to_lowercase(),
            healthcheck_path: normalize_url(
                var("SHOWCASE_HEALTHCHECK_PATH").as_deref(),
                &d.healthcheck_path,
            ),
            feature_flags: var("SHOWCASE_FEATURE_FLAGS")
                .map(|v| parse_feature_flags(&v))
                .unwrap_or_default(),
            experiments_enabled: parse_bool(
                var("SHOWCASE_EXPERIMENTS_ENABLED").as_deref(),
                d.experiments_enabled,
            ),
        }
    }

    /// Boolean value of a feature flag, or `fallback` when it is absent or not a boolean
    pub fn get_flag(&self, name: &str, fallback: bool) -> bool {
        if name.is_empty() {
            return fallback;
        }
        if name == EXPERIMENTS_FLAG {
            return self.experiments_enabled;
        }
        match self.feature_flags.get(name) {
            Some(Value::Bool(b)) => *b,
            _ => fallback,
        }
    }

    pub fn is_production(&self) -> bool {
        self.node_env == "production"
    }

    /// TOML rendering. TOML has no null, so null flags and null entries inside flag
    /// values are left out.
    pub fn to_toml(&self) -> Result<String> {
        let mut printable = self.clone();
        printable.feature_flags = self
            .feature_flags
            .iter()
            .filter_map(|(key, value)| Some((key.clone(), without_nulls(value)?)))
            .collect();
        toml::to_string_pretty(&printable).map_err(|err| AppError::Serialize(err.to_string()))
    }
}

fn without_nulls(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(Value::Array(items.iter().filter_map(without_nulls).collect())),
        Value::Object(fields) => Some(Value::Object(
            fields
                .iter()
                .filter_map(|(key, value)| Some((key.clone(), without_nulls(value)?)))
                .collect(),
        )),
        other => Some(other.clone()),
    }
}

/// Parse a permissive boolean
pub fn parse_bool(value: Option<&str>, fallback: bool) -> bool {
    let Some(value) = value else {
        return fallback;
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => true,
        "0" | "false" | "no" | "n" | "off" => false,
        _ => fallback,
    }
}

/// Parse a TCP port
pub fn parse_port(value: Option<&str>, fallback: u16) -> u16 {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return fallback;
    };
    match value.parse::<u16>() {
        Ok(port) => port,
        Err(err) => {
            tracing::warn!(value, %err, fallback, "invalid port, using default");
            fallback
        }
    }
}

fn duplicate_slashes() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new("/{2,}").ok()).as_ref()
}

fn collapse_slashes(path: &str) -> String {
    match duplicate_slashes() {
        Some(re) => re.replace_all(path, "/").into_owned(),
        None => path.to_string(),
    }
}

fn is_absolute(url: &str) -> bool {
    ["http://", "https://", "ws://", "wss://"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// Normalize a URL or path
///
/// Absolute URLs only lose trailing slashes. Anything else is treated as a path: it
/// gets exactly one leading slash, no repeated slashes and no trailing slash. The
/// root path stays `/`.
pub fn normalize_url(value: Option<&str>, fallback: &str) -> String {
    let v = value.map(str::trim).unwrap_or_default();
    if v.is_empty() {
        return fallback.to_string();
    }
    if is_absolute(v) {
        return v.trim_end_matches('/').to_string();
    }
    let joined = format!("/{v}");
    let collapsed = collapse_slashes(&joined);
    match collapsed.trim_end_matches('/') {
        "" => "/".to_string(),
        path => path.to_string(),
    }
}

/// Parse the feature flag bag
///
/// A JSON object is used as-is. Input that looks like JSON but does not parse to an
/// object yields no flags. Anything else is a comma or semicolon separated list of
/// flag names, each set to `true`.
pub fn parse_feature_flags(value: &str) -> IndexMap<String, Value> {
    let trimmed = value.trim();
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => return map.into_iter().collect(),
        Ok(Value::Array(_)) => {
            tracing::warn!("feature flags given as a JSON array, ignoring");
            return IndexMap::new();
        }
        Err(err) if trimmed.starts_with('{') || trimmed.starts_with('[') => {
            tracing::warn!(%err, "malformed feature flag JSON, ignoring");
            return IndexMap::new();
        }
        _ => {}
    }

    trimmed
        .split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|key| (key.to_string(), Value::Bool(true)))
        .collect()
}
