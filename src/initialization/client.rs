//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - TCP connect timeout (`TCP_CONNECT_TIMEOUT_SECS`)
/// - reqwest's default redirect policy (at most 10 hops)
/// - Rustls TLS backend
///
/// Per-resource timeouts are applied per request, not here, because robots.txt,
/// page bodies and sitemap probes each carry their own budget.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .user_agent(config.user_agent.clone())
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_default_config() {
        assert!(init_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_client_with_custom_user_agent() {
        let config = Config {
            user_agent: "seo_audit_test/1.0".to_string(),
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
