use std::env;
use std::fmt;
use std::time::Duration;

use crate::models::DEFAULT_PER_PAGE;

pub const DEFAULT_BASE_URL: &str = "https://www.flickr.com/services/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub per_page: u32,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Build from any key lookup. `FLICKR_API_KEY` falls back to the value baked in at build time.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("FLICKR_API_KEY")
            .or_else(|| option_env!("FLICKR_API_KEY").map(str::to_string))
            .unwrap_or_default();
        let base_url = lookup("FLICKR_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let per_page = lookup("FLICKR_PER_PAGE")
            .and_then(|v| v.parse().ok())
            .filter(|n: &u32| *n > 0)
            .unwrap_or(DEFAULT_PER_PAGE);
        let timeout_secs = lookup("FLICKR_TIMEOUT_SECS").and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            api_key,
            base_url,
            per_page,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// REST endpoint, always `{base}/rest/` with exactly one slash between.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/", self.base_url.trim_end_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// Keeps the API key out of logs and panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("base_url", &self.base_url)
            .field("per_page", &self.per_page)
            .field("timeout", &self.timeout)
            .finish()
    }
}
