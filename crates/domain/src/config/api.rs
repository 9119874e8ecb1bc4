use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.linode.com/v4";

/// Smallest and largest `page_size` the Linode API accepts.
pub const MIN_PAGE_SIZE: u32 = 25;
pub const MAX_PAGE_SIZE: u32 = 500;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Personal access token. Requests go out unauthenticated when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Prepended to the client's own user agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ua_prefix: Option<String>,

    /// Page size for list calls; the service default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
            ua_prefix: None,
            page_size: None,
        }
    }
}

impl ApiConfig {
    pub fn user_agent(&self) -> String {
        let own = format!("linode-records/{}", env!("CARGO_PKG_VERSION"));
        match self.ua_prefix.as_deref().map(str::trim) {
            Some(prefix) if !prefix.is_empty() => format!("{} {}", prefix, own),
            _ => own,
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
