//! `Strict-Transport-Security` builder.

use std::fmt;

use crate::policy::HeaderPolicy;

const HEADER_NAME: &str = "Strict-Transport-Security";

/// One year, the `max-age` of a freshly created builder.
pub const ONE_YEAR: u64 = 31_536_000;

/// Two years, the `max-age` recommended for preload list submission.
pub const TWO_YEARS: u64 = 63_072_000;

/// Builder for the `Strict-Transport-Security` (HSTS) header.
///
/// Renders `max-age=<n>` followed by `; includeSubDomains` and `; preload`
/// in that fixed order, whatever order the methods were called in.
///
/// # Examples
///
/// ```
/// use secure_headers::HeaderPolicy;
/// use secure_headers::headers::StrictTransportSecurity;
///
/// let hsts = StrictTransportSecurity::new()
///     .preload()
///     .include_subdomains()
///     .max_age(31536000);
/// assert_eq!(hsts.header_value(), "max-age=31536000; includeSubDomains; preload");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct StrictTransportSecurity {
    max_age: u64,
    include_subdomains: bool,
    preload: bool,
    raw: Option<String>,
}

impl StrictTransportSecurity {
    /// Creates a builder rendering `max-age=31536000`.
    pub fn new() -> Self {
        Self {
            max_age: ONE_YEAR,
            include_subdomains: false,
            preload: false,
            raw: None,
        }
    }

    /// Two-year `max-age` with `includeSubDomains` and `preload`, the
    /// parameterization required by the HSTS preload list.
    pub fn preload_ready() -> Self {
        Self::new().max_age(TWO_YEARS).include_subdomains().preload()
    }

    /// Sets `max-age` in seconds.
    pub fn max_age(mut self, seconds: u64) -> Self {
        self.raw = None;
        self.max_age = seconds;
        self
    }

    /// Adds `includeSubDomains`.
    pub fn include_subdomains(mut self) -> Self {
        self.raw = None;
        self.include_subdomains = true;
        self
    }

    /// Adds `preload`.
    pub fn preload(mut self) -> Self {
        self.raw = None;
        self.preload = true;
        self
    }

    /// Replaces the value with a raw string.
    ///
    /// A later call to any directive method discards the raw value.
    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.raw = Some(value.into());
        self
    }

    /// Resets the builder to `max-age=31536000`.
    pub fn clear(self) -> Self {
        Self::new()
    }
}

impl Default for StrictTransportSecurity {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderPolicy for StrictTransportSecurity {
    fn header_name(&self) -> &str {
        HEADER_NAME
    }

    fn header_value(&self) -> String {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }

        let mut value = format!("max-age={}", self.max_age);
        if self.include_subdomains {
            value.push_str("; includeSubDomains");
        }
        if self.preload {
            value.push_str("; preload");
        }
        value
    }
}

impl fmt::Display for StrictTransportSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header_value())
    }
}
