//! Dashboard runtime configuration.
//!
//! The API origin is baked in at build time through `ADMIN_API_URL`
//! (e.g. `ADMIN_API_URL=https://api.example.com trunk build`). Everything
//! else is fixed.

use leptos::prelude::*;

/// API origin used when `ADMIN_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Hard ceiling for a single HTTP request.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub request_timeout_ms: u32,
}

impl AppConfig {
    /// Resolve configuration from the build environment.
    pub fn load() -> Self {
        let config = Self::from_api_url(option_env!("ADMIN_API_URL"));
        log::debug!("API base url: {}", config.api_url);
        config
    }

    fn from_api_url(api_url: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_url,
            request_timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_api_url(None)
    }
}

/// Configuration provided by `App`.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.request_timeout_ms, 10_000);
    }

    #[test]
    fn test_api_url_is_normalized() {
        let config = AppConfig::from_api_url(Some(" https://api.example.com/ "));
        assert_eq!(config.api_url, "https://api.example.com");
    }

    #[test]
    fn test_blank_api_url_falls_back() {
        let config = AppConfig::from_api_url(Some("   "));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
