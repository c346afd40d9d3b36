//! `X-Content-Type-Options` builder.

use std::borrow::Cow;

/// Builder for the `X-Content-Type-Options` header. Always `nosniff` unless
/// overridden with [`set`](Self::set).
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct XContentTypeOptions {
    value: Cow<'static, str>,
}

impl XContentTypeOptions {
    /// Creates a builder rendering `nosniff`.
    pub fn new() -> Self {
        Self {
            value: Cow::Borrowed("nosniff"),
        }
    }

    /// `nosniff`
    pub fn nosniff(mut self) -> Self {
        self.value = Cow::Borrowed("nosniff");
        self
    }
}

single_value_header!(XContentTypeOptions, "X-Content-Type-Options");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeaderPolicy;

    #[test]
    fn renders_nosniff() {
        let options = XContentTypeOptions::new();
        assert_eq!(options.header_name(), "X-Content-Type-Options");
        assert_eq!(options.header_value(), "nosniff");
        assert_eq!(options.set("other").nosniff().header_value(), "nosniff");
    }
}
