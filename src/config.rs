//! Configuration for the storefront backend endpoints.
//!
//! Both URLs have baked-in defaults and can be overridden through the
//! environment; no other configuration is read anywhere in the crate.

/// Default REST API base URL
pub const DEFAULT_API_URL: &str = "https://larek-api.nomoreparties.co/api/weblarek";

/// Default CDN base URL for product images
pub const DEFAULT_CDN_URL: &str = "https://larek-api.nomoreparties.co/content/weblarek";

/// Environment variable overriding the API base URL
pub const API_URL_ENV_VAR: &str = "LAREK_API_URL";

/// Environment variable overriding the CDN base URL
pub const CDN_URL_ENV_VAR: &str = "LAREK_CDN_URL";

/// Resolved backend endpoints
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub cdn_url: String,
}

impl ApiConfig {
    /// Read both URLs, environment first, defaults second
    pub fn from_env() -> Self {
        Self {
            base_url: get_api_url(),
            cdn_url: get_cdn_url(),
        }
    }
}

/// Get the API base URL, checking the environment variable first
pub fn get_api_url() -> String {
    std::env::var_os(API_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Get the CDN base URL, checking the environment variable first
pub fn get_cdn_url() -> String {
    std::env::var_os(CDN_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_CDN_URL.to_string())
}
