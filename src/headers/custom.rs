//! Arbitrary `name: value` headers.

use std::fmt;

use crate::policy::HeaderPolicy;

/// A header with a caller-chosen name and value.
///
/// The value is passed through verbatim.
///
/// # Examples
///
/// ```
/// use secure_headers::HeaderPolicy;
/// use secure_headers::headers::CustomHeader;
///
/// let header = CustomHeader::new("X-Robots-Tag", "noindex").set("noindex, nofollow");
/// assert_eq!(header.header_name(), "X-Robots-Tag");
/// assert_eq!(header.header_value(), "noindex, nofollow");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct CustomHeader {
    name: String,
    value: String,
}

impl CustomHeader {
    /// Creates a header with the given name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Snapshots any other builder into a custom header.
    pub fn from_policy<P: HeaderPolicy + ?Sized>(policy: &P) -> Self {
        Self::new(policy.header_name(), policy.header_value())
    }

    /// Replaces the value.
    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

impl HeaderPolicy for CustomHeader {
    fn header_name(&self) -> &str {
        &self.name
    }

    fn header_value(&self) -> String {
        self.value.clone()
    }
}

impl fmt::Display for CustomHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
