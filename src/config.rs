//! Client Configuration
//!
//! Page-level settings: timing and log level from an optional JSON block,
//! plus what the server rendered into the page (page kind, CSRF token,
//! reset token).

use log::LevelFilter;
use serde::Deserialize;

/// Settings read from `<script type="application/json" id="client-config">`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_success_delay")]
    pub success_delay_ms: u32,
    #[serde(default = "default_failure_delay")]
    pub failure_delay_ms: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_success_delay() -> u32 {
    1200
}

fn default_failure_delay() -> u32 {
    4000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            success_delay_ms: default_success_delay(),
            failure_delay_ms: default_failure_delay(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Parse the JSON config block; anything malformed falls back to defaults
    pub fn parse(raw: Option<&str>) -> Result<Self, serde_json::Error> {
        match raw.map(str::trim) {
            Some(text) if !text.is_empty() => serde_json::from_str(text),
            _ => Ok(Self::default()),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Which server-rendered page the client is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Auth,
    User,
    Todos,
    ResetPassword,
    Other,
}

impl PageKind {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("auth") => Self::Auth,
            Some("user") => Self::User,
            Some("todos") => Self::Todos,
            Some("reset-password") => Self::ResetPassword,
            _ => Self::Other,
        }
    }
}

/// Values the server rendered into the current page
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    pub kind: PageKind,
    pub csrf_token: Option<String>,
    /// `v` query parameter carried by password reset links
    pub reset_token: Option<String>,
}

impl PageContext {
    pub fn new(kind: PageKind, csrf_token: Option<String>, reset_token: Option<String>) -> Self {
        Self {
            kind,
            csrf_token: csrf_token.filter(|t| !t.is_empty()),
            reset_token: reset_token.filter(|t| !t.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let config = ClientConfig::parse(None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.success_delay_ms, 1200);
        assert_eq!(config.failure_delay_ms, 4000);

        let blank = ClientConfig::parse(Some("  \n")).unwrap();
        assert_eq!(blank, ClientConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = ClientConfig::parse(Some(r#"{"success_delay_ms": 500, "log_level": "debug"}"#)).unwrap();
        assert_eq!(config.success_delay_ms, 500);
        assert_eq!(config.failure_delay_ms, 4000);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(ClientConfig::parse(Some("{not json")).is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let config = ClientConfig { log_level: "chatty".into(), ..Default::default() };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_page_kind_from_attr() {
        assert_eq!(PageKind::from_attr(Some("todos")), PageKind::Todos);
        assert_eq!(PageKind::from_attr(Some("reset-password")), PageKind::ResetPassword);
        assert_eq!(PageKind::from_attr(Some("about")), PageKind::Other);
        assert_eq!(PageKind::from_attr(None), PageKind::Other);
    }

    #[test]
    fn test_empty_tokens_are_dropped() {
        let page = PageContext::new(PageKind::User, Some(String::new()), Some("abc".into()));
        assert_eq!(page.csrf_token, None);
        assert_eq!(page.reset_token.as_deref(), Some("abc"));
    }
}
