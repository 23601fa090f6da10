//! Runtime configuration, resolved once at start and provided through context.

use leptos::prelude::*;

/// Port the API listens on when no explicit base URL was compiled in.
pub const DEFAULT_API_PORT: u16 = 4000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let location = web_sys::window().map(|w| w.location());
        let protocol = location.as_ref().and_then(|l| l.protocol().ok());
        let hostname = location.as_ref().and_then(|l| l.hostname().ok());
        Self {
            api_base: resolve_api_base(
                option_env!("SALES_TRACKER_BACK_URL"),
                protocol.as_deref(),
                hostname.as_deref(),
            ),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

/// An explicit base wins; otherwise the API is assumed to live next to the
/// page on [`DEFAULT_API_PORT`]. Trailing slashes are dropped so paths can
/// always start with `/`.
pub fn resolve_api_base(
    explicit: Option<&str>,
    protocol: Option<&str>,
    hostname: Option<&str>,
) -> String {
    if let Some(base) = explicit.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    let protocol = protocol.unwrap_or("http:");
    let hostname = hostname.unwrap_or("127.0.0.1");
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_wins_and_loses_trailing_slash() {
        assert_eq!(
            resolve_api_base(Some("https://api.example.com/"), Some("http:"), Some("localhost")),
            "https://api.example.com"
        );
    }

    #[test]
    fn falls_back_to_page_host() {
        assert_eq!(
            resolve_api_base(None, Some("https:"), Some("crm.local")),
            "https://crm.local:4000"
        );
        assert_eq!(resolve_api_base(Some("  "), None, None), "http://127.0.0.1:4000");
    }
}
