//! `X-XSS-Protection` builder.

use std::borrow::Cow;

/// Builder for the legacy `X-XSS-Protection` header.
///
/// Renders `0`, which turns off the filter in browsers that still ship one.
/// Content-Security-Policy replaces this header. It is not an aggregator
/// role; add it through [`CustomHeader::from_policy`](super::CustomHeader::from_policy).
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct XXSSProtection {
    value: Cow<'static, str>,
}

impl XXSSProtection {
    /// Creates a builder rendering `0`.
    pub fn new() -> Self {
        Self {
            value: Cow::Borrowed("0"),
        }
    }
}

single_value_header!(XXSSProtection, "X-XSS-Protection");
