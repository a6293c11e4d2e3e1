//! Site configuration
//!
//! Three recognized options, all defaulting to the empty string:
//! - `API_BASE_URL` - webhook host, trailing slashes are stripped
//! - `CLIENT_API_KEY` - sent verbatim with every lead
//! - `RECAPTCHA_SITE_KEY` - empty disables reCAPTCHA entirely
//!
//! The browser build resolves these at compile time through
//! [`SiteConfig::from_lookup`].

use crate::content::LEAD_WEBHOOK_PATH;

pub const API_BASE_URL_KEY: &str = "API_BASE_URL";
pub const CLIENT_API_KEY_KEY: &str = "CLIENT_API_KEY";
pub const RECAPTCHA_SITE_KEY_KEY: &str = "RECAPTCHA_SITE_KEY";

const RECAPTCHA_SCRIPT_BASE: &str = "https://www.google.com/recaptcha/api.js";

/// Deployment settings for the lead form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Base URL without trailing slashes (may be empty for same-origin)
    pub api_base_url: String,
    pub client_api_key: String,
    pub recaptcha_site_key: String,
}

impl SiteConfig {
    /// Build from a key lookup. Missing or blank values become empty.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_default()
        };

        Self {
            api_base_url: read(API_BASE_URL_KEY).trim_end_matches('/').to_string(),
            client_api_key: read(CLIENT_API_KEY_KEY),
            recaptcha_site_key: read(RECAPTCHA_SITE_KEY_KEY).trim().to_string(),
        }
    }

    /// `{API_BASE_URL}/webhooks/lead`
    pub fn lead_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.api_base_url.trim_end_matches('/'),
            LEAD_WEBHOOK_PATH
        )
    }

    /// Site key, or `None` when reCAPTCHA is disabled
    pub fn recaptcha_site_key(&self) -> Option<&str> {
        if self.recaptcha_site_key.is_empty() {
            None
        } else {
            Some(&self.recaptcha_site_key)
        }
    }

    pub fn recaptcha_enabled(&self) -> bool {
        self.recaptcha_site_key().is_some()
    }

    /// Script URL for the configured site key
    pub fn recaptcha_script_url(&self) -> Option<String> {
        self.recaptcha_site_key()
            .map(|key| format!("{RECAPTCHA_SCRIPT_BASE}?render={key}"))
    }
}
