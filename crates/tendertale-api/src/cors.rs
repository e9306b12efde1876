//! CORS policy for the web client.

use axum::http::request::Parts;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Config;

/// Origins allowed regardless of configuration: local development servers
/// and preview deployments.
const DEFAULT_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://192.168.10.8:5173",
    "https://*.vercel.app",
    "https://*.railway.app",
];

/// Set of allowed origins. Patterns of the form `scheme://*.domain` match any
/// single- or multi-label subdomain of `domain` under that scheme.
#[derive(Debug, Clone, Default)]
pub struct OriginPolicy {
    exact: Vec<String>,
    wildcard: Vec<(String, String)>,
}

impl OriginPolicy {
    /// Builds a policy from origin patterns.
    pub fn new<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Self {
        let mut policy = Self::default();
        for pattern in patterns {
            let pattern = pattern.trim_end_matches('/');
            match pattern.split_once("://*.") {
                Some((scheme, domain)) => policy
                    .wildcard
                    .push((format!("{scheme}://"), format!(".{domain}"))),
                None => policy.exact.push(pattern.to_owned()),
            }
        }
        policy
    }

    /// The default policy plus the configured frontend URL.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            DEFAULT_ORIGINS
                .iter()
                .copied()
                .chain(config.frontend_url.as_deref()),
        )
    }

    /// Returns `true` if `origin` may make credentialed cross-origin requests.
    #[must_use]
    pub fn allows(&self, origin: &str) -> bool {
        if self.exact.iter().any(|o| o == origin) {
            return true;
        }
        self.wildcard.iter().any(|(scheme, suffix)| {
            origin
                .strip_prefix(scheme.as_str())
                .and_then(|host| host.strip_suffix(suffix.as_str()))
                .is_some_and(|sub| {
                    !sub.is_empty()
                        && sub
                            .bytes()
                            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.'))
                })
        })
    }
}

/// Builds the CORS layer applied to every route.
#[must_use]
pub fn cors_layer(policy: OriginPolicy) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
            origin.to_str().is_ok_and(|origin| policy.allows(origin))
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .allow_credentials(true)
}
