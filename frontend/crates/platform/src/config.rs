//! API Configuration
//!
//! A single, environment-configurable base URL. The storefront talks
//! to exactly one API origin; per-service hardcoded addresses are
//! deliberately not supported.

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "MINI_E_API_URL";

/// Default base URL for local development
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Remote API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, including the `/api` prefix
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Read the base URL from the environment, falling back to the
    /// development default
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { base_url }
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let config = ApiConfig {
            base_url: "http://localhost:3000/api".to_string(),
        };
        assert_eq!(
            config.endpoint("/auth/login"),
            "http://localhost:3000/api/auth/login"
        );
        assert_eq!(
            config.endpoint("users/me"),
            "http://localhost:3000/api/users/me"
        );
    }

    #[test]
    fn test_endpoint_join_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:3000/api/".to_string(),
        };
        assert_eq!(
            config.endpoint("/products"),
            "http://localhost:3000/api/products"
        );
    }
}
