//! `Referrer-Policy` builder.

use std::borrow::Cow;

const DEFAULT_VALUE: &str = "strict-origin-when-cross-origin";

/// Builder for the `Referrer-Policy` header.
///
/// Holds a single token; the last method called wins. Defaults to
/// `strict-origin-when-cross-origin`.
///
/// # Examples
///
/// ```
/// use secure_headers::HeaderPolicy;
/// use secure_headers::headers::ReferrerPolicy;
///
/// assert_eq!(ReferrerPolicy::new().header_value(), "strict-origin-when-cross-origin");
/// assert_eq!(ReferrerPolicy::new().no_referrer().header_value(), "no-referrer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ReferrerPolicy {
    value: Cow<'static, str>,
}

impl ReferrerPolicy {
    /// Creates a builder rendering `strict-origin-when-cross-origin`.
    pub fn new() -> Self {
        Self {
            value: Cow::Borrowed(DEFAULT_VALUE),
        }
    }

    fn token(mut self, token: &'static str) -> Self {
        self.value = Cow::Borrowed(token);
        self
    }

    /// `no-referrer`
    pub fn no_referrer(self) -> Self {
        self.token("no-referrer")
    }

    /// `no-referrer-when-downgrade`
    pub fn no_referrer_when_downgrade(self) -> Self {
        self.token("no-referrer-when-downgrade")
    }

    /// `origin`
    pub fn origin(self) -> Self {
        self.token("origin")
    }

    /// `origin-when-cross-origin`
    pub fn origin_when_cross_origin(self) -> Self {
        self.token("origin-when-cross-origin")
    }

    /// `same-origin`
    pub fn same_origin(self) -> Self {
        self.token("same-origin")
    }

    /// `strict-origin`
    pub fn strict_origin(self) -> Self {
        self.token("strict-origin")
    }

    /// `strict-origin-when-cross-origin`
    pub fn strict_origin_when_cross_origin(self) -> Self {
        self.token("strict-origin-when-cross-origin")
    }

    /// `unsafe-url`
    pub fn unsafe_url(self) -> Self {
        self.token("unsafe-url")
    }
}

single_value_header!(ReferrerPolicy, "Referrer-Policy");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeaderPolicy;

    #[test]
    fn last_call_wins() {
        let policy = ReferrerPolicy::new().no_referrer().same_origin();
        assert_eq!(policy.header_value(), "same-origin");
    }

    #[test]
    fn set_and_clear() {
        let policy = ReferrerPolicy::new().set("no-referrer, strict-origin-when-cross-origin");
        assert_eq!(
            policy.header_value(),
            "no-referrer, strict-origin-when-cross-origin"
        );
        assert_eq!(policy.clear().header_value(), DEFAULT_VALUE);
    }
}
