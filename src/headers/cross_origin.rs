//! `Cross-Origin-Opener-Policy` and `Cross-Origin-Embedder-Policy` builders.

use std::borrow::Cow;

/// Builder for the `Cross-Origin-Opener-Policy` header. Defaults to `same-origin`.
///
/// # Examples
///
/// ```
/// use secure_headers::HeaderPolicy;
/// use secure_headers::headers::CrossOriginOpenerPolicy;
///
/// let coop = CrossOriginOpenerPolicy::new().same_origin_allow_popups();
/// assert_eq!(coop.header_value(), "same-origin-allow-popups");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct CrossOriginOpenerPolicy {
    value: Cow<'static, str>,
}

impl CrossOriginOpenerPolicy {
    /// Creates a builder rendering `same-origin`.
    pub fn new() -> Self {
        Self {
            value: Cow::Borrowed("same-origin"),
        }
    }

    /// `unsafe-none`
    pub fn unsafe_none(mut self) -> Self {
        self.value = Cow::Borrowed("unsafe-none");
        self
    }

    /// `same-origin-allow-popups`
    pub fn same_origin_allow_popups(mut self) -> Self {
        self.value = Cow::Borrowed("same-origin-allow-popups");
        self
    }

    /// `same-origin`
    pub fn same_origin(mut self) -> Self {
        self.value = Cow::Borrowed("same-origin");
        self
    }
}

single_value_header!(CrossOriginOpenerPolicy, "Cross-Origin-Opener-Policy");

/// Builder for the `Cross-Origin-Embedder-Policy` header. Defaults to `require-corp`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct CrossOriginEmbedderPolicy {
    value: Cow<'static, str>,
}

impl CrossOriginEmbedderPolicy {
    /// Creates a builder rendering `require-corp`.
    pub fn new() -> Self {
        Self {
            value: Cow::Borrowed("require-corp"),
        }
    }

    /// `unsafe-none`
    pub fn unsafe_none(mut self) -> Self {
        self.value = Cow::Borrowed("unsafe-none");
        self
    }

    /// `require-corp`
    pub fn require_corp(mut self) -> Self {
        self.value = Cow::Borrowed("require-corp");
        self
    }

    /// `credentialless`
    pub fn credentialless(mut self) -> Self {
        self.value = Cow::Borrowed("credentialless");
        self
    }
}

single_value_header!(CrossOriginEmbedderPolicy, "Cross-Origin-Embedder-Policy");
