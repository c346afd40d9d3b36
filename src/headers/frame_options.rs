//! `X-Frame-Options` builder.

use std::borrow::Cow;

/// Builder for the `X-Frame-Options` header.
///
/// Defaults to `SAMEORIGIN`.
///
/// # Examples
///
/// ```
/// use secure_headers::HeaderPolicy;
/// use secure_headers::headers::XFrameOptions;
///
/// assert_eq!(XFrameOptions::new().header_value(), "SAMEORIGIN");
/// assert_eq!(XFrameOptions::new().deny().header_value(), "DENY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct XFrameOptions {
    value: Cow<'static, str>,
}

impl XFrameOptions {
    /// Creates a builder rendering `SAMEORIGIN`.
    pub fn new() -> Self {
        Self {
            value: Cow::Borrowed("SAMEORIGIN"),
        }
    }

    /// `DENY`: the page may not be framed at all.
    pub fn deny(mut self) -> Self {
        self.value = Cow::Borrowed("DENY");
        self
    }

    /// `SAMEORIGIN`: only same-origin pages may frame the page.
    pub fn sameorigin(mut self) -> Self {
        self.value = Cow::Borrowed("SAMEORIGIN");
        self
    }
}

single_value_header!(XFrameOptions, "X-Frame-Options");
