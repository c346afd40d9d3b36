//! `Cache-Control` builder.

use std::fmt;

use super::directives::Directives;
use crate::policy::HeaderPolicy;

const HEADER_NAME: &str = "Cache-Control";
const DEFAULT_VALUE: &str = "no-store";

/// Builder for the `Cache-Control` header.
///
/// Directives are either bare flags (`no-store`) or `key=seconds`
/// (`max-age=0`), joined by `", "` in first-insertion order. An empty
/// builder renders `no-store`.
///
/// # Examples
///
/// ```
/// use secure_headers::HeaderPolicy;
/// use secure_headers::headers::CacheControl;
///
/// let cache = CacheControl::new().no_cache().max_age(0).must_revalidate();
/// assert_eq!(cache.header_value(), "no-cache, max-age=0, must-revalidate");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct CacheControl {
    raw: Option<String>,
    directives: Directives<Option<u64>>,
}

impl CacheControl {
    /// Creates an empty builder (renders `no-store`).
    pub fn new() -> Self {
        Self::default()
    }

    fn flag(mut self, directive: &'static str) -> Self {
        self.directives.set(directive, None);
        self
    }

    fn seconds(mut self, directive: &'static str, seconds: u64) -> Self {
        self.directives.set(directive, Some(seconds));
        self
    }

    /// `immutable`
    pub fn immutable(self) -> Self {
        self.flag("immutable")
    }

    /// `max-age=<seconds>`
    pub fn max_age(self, seconds: u64) -> Self {
        self.seconds("max-age", seconds)
    }

    /// `must-revalidate`
    pub fn must_revalidate(self) -> Self {
        self.flag("must-revalidate")
    }

    /// `must-understand`
    pub fn must_understand(self) -> Self {
        self.flag("must-understand")
    }

    /// `no-cache`
    pub fn no_cache(self) -> Self {
        self.flag("no-cache")
    }

    /// `no-store`
    pub fn no_store(self) -> Self {
        self.flag("no-store")
    }

    /// `no-transform`
    pub fn no_transform(self) -> Self {
        self.flag("no-transform")
    }

    /// `private`
    pub fn private(self) -> Self {
        self.flag("private")
    }

    /// `proxy-revalidate`
    pub fn proxy_revalidate(self) -> Self {
        self.flag("proxy-revalidate")
    }

    /// `public`
    pub fn public(self) -> Self {
        self.flag("public")
    }

    /// `s-maxage=<seconds>`
    pub fn s_maxage(self, seconds: u64) -> Self {
        self.seconds("s-maxage", seconds)
    }

    /// `stale-if-error=<seconds>`
    pub fn stale_if_error(self, seconds: u64) -> Self {
        self.seconds("stale-if-error", seconds)
    }

    /// `stale-while-revalidate=<seconds>`
    pub fn stale_while_revalidate(self, seconds: u64) -> Self {
        self.seconds("stale-while-revalidate", seconds)
    }

    /// Replaces the whole value with a raw string.
    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.directives.clear();
        self.raw = Some(value.into());
        self
    }

    /// Removes every directive and any raw value.
    pub fn clear(mut self) -> Self {
        self.directives.clear();
        self.raw = None;
        self
    }
}

impl HeaderPolicy for CacheControl {
    fn header_name(&self) -> &str {
        HEADER_NAME
    }

    fn header_value(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(raw) = &self.raw {
            parts.push(raw.clone());
        }

        for (directive, seconds) in self.directives.iter() {
            match seconds {
                Some(seconds) => parts.push(format!("{}={}", directive, seconds)),
                None => parts.push(directive.to_string()),
            }
        }

        if parts.is_empty() {
            DEFAULT_VALUE.to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header_value())
    }
}
