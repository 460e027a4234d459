use std::num::NonZeroU32;

use axum::http::HeaderMap;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

const UNKNOWN_CLIENT: &str = "unknown";

/// Per-client quota for contact submissions.
pub struct ContactLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
}

impl ContactLimiter {
    pub fn per_minute(count: NonZeroU32) -> Self {
        Self {
            limiter: RateLimiter::keyed(Quota::per_minute(count)),
        }
    }

    pub fn check(&self, client: &str) -> bool {
        self.limiter.check_key(&client.to_string()).is_ok()
    }

    /// Drops keys whose quota has fully replenished.
    pub fn prune(&self) {
        self.limiter.retain_recent();
    }
}

/// First address in X-Forwarded-For, since the server runs behind a proxy.
pub fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .unwrap_or(UNKNOWN_CLIENT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use nonzero_ext::nonzero;

    #[test]
    fn quota_is_tracked_per_client() {
        let limiter = ContactLimiter::per_minute(nonzero!(2u32));
        assert!(limiter.check("203.0.113.7"));
        assert!(limiter.check("203.0.113.7"));
        assert!(!limiter.check("203.0.113.7"));
        assert!(limiter.check("198.51.100.2"));
    }

    #[test]
    fn client_key_takes_first_forwarded_address() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        assert_eq!(client_key(&headers), "203.0.113.7");
    }

    #[test]
    fn client_key_defaults_to_unknown() {
        assert_eq!(client_key(&HeaderMap::new()), "unknown");

        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(" "));
        assert_eq!(client_key(&headers), "unknown");
    }
}
