//! Static credential authentication.
//!
//! Mediasite accepts HTTP Basic credentials plus an API key header. The
//! `Authorization` value is derived once and reused for every request.

use std::fmt;
use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

use ms_core::config::MediasiteConfig;
use ms_core::constants::API_KEY_HEADER;

/// Attaches `Authorization` and `sfapikey` headers to outgoing requests.
#[derive(Clone)]
pub struct Authenticator {
    username: String,
    password: String,
    api_key: String,
    /// `Basic ...` value, filled on first use.
    header: OnceLock<String>,
}

impl Authenticator {
    pub fn new(username: &str, password: &str, api_key: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            api_key: api_key.to_string(),
            header: OnceLock::new(),
        }
    }

    /// Build an authenticator from the credentials in a configuration.
    pub fn from_config(config: &MediasiteConfig) -> Self {
        Self::new(&config.username, &config.password, &config.api_key)
    }

    /// The `Authorization` header value.
    pub fn authorization(&self) -> &str {
        self.header.get_or_init(|| {
            let credentials = format!("{}:{}", self.username, self.password);
            format!("Basic {}", STANDARD.encode(credentials))
        })
    }

    /// The API key sent in the `sfapikey` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Attach both authentication headers to a request.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(AUTHORIZATION, self.authorization())
            .header(API_KEY_HEADER, self.api_key.as_str())
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_header_value() {
        let auth = Authenticator::new("admin", "secret", "key-1");
        // base64("admin:secret")
        assert_eq!(auth.authorization(), "Basic YWRtaW46c2VjcmV0");
        assert_eq!(auth.api_key(), "key-1");
    }

    #[test]
    fn test_header_is_cached() {
        let auth = Authenticator::new("admin", "secret", "key-1");
        let first = auth.authorization();
        let second = auth.authorization();
        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_different_credentials_differ() {
        let a = Authenticator::new("admin", "secret", "k");
        let b = Authenticator::new("admin", "other", "k");
        let c = Authenticator::new("someone", "secret", "k");
        assert_ne!(a.authorization(), b.authorization());
        assert_ne!(a.authorization(), c.authorization());
    }

    #[test]
    fn test_concurrent_first_use() {
        let auth = std::sync::Arc::new(Authenticator::new("admin", "secret", "k"));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let auth = auth.clone();
                std::thread::spawn(move || auth.authorization().to_string())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), "Basic YWRtaW46c2VjcmV0");
        }
    }

    #[test]
    fn test_debug_hides_secrets() {
        let auth = Authenticator::new("admin", "secret", "key-1");
        let debug = format!("{auth:?}");
        assert!(!debug.contains("secret"));
        assert!(!debug.contains("key-1"));
    }

    #[test]
    fn test_apply_sets_headers() {
        let auth = Authenticator::new("admin", "secret", "key-1");
        let request = auth
            .apply(reqwest::Client::new().get("http://localhost/Folders"))
            .build()
            .unwrap();
        assert_eq!(request.headers()["authorization"], "Basic YWRtaW46c2VjcmV0");
        assert_eq!(request.headers()["sfapikey"], "key-1");
    }
}
