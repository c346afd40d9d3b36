//! `Clear-Site-Data` builder.

use std::fmt;

use crate::policy::HeaderPolicy;

const HEADER_NAME: &str = "Clear-Site-Data";

/// Builder for the `Clear-Site-Data` header.
///
/// Renders each selected data type as a quoted token joined by `", "`. With
/// nothing selected the wildcard `"*"` is emitted. This header is not an
/// aggregator role; add it through [`CustomHeader::from_policy`](super::CustomHeader::from_policy)
/// on the responses that should trigger the wipe (typically logout).
///
/// # Examples
///
/// ```
/// use secure_headers::HeaderPolicy;
/// use secure_headers::headers::ClearSiteData;
///
/// let clear = ClearSiteData::new().cookies().storage();
/// assert_eq!(clear.header_value(), "\"cookies\", \"storage\"");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct ClearSiteData {
    types: Vec<&'static str>,
}

impl ClearSiteData {
    /// Creates an empty builder (renders `"*"`).
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, data_type: &'static str) -> Self {
        if !self.types.contains(&data_type) {
            self.types.push(data_type);
        }
        self
    }

    /// `"cache"`
    pub fn cache(self) -> Self {
        self.push("cache")
    }

    /// `"cookies"`
    pub fn cookies(self) -> Self {
        self.push("cookies")
    }

    /// `"storage"`
    pub fn storage(self) -> Self {
        self.push("storage")
    }

    /// `"executionContexts"`
    pub fn execution_contexts(self) -> Self {
        self.push("executionContexts")
    }

    /// `"*"`
    pub fn wildcard(self) -> Self {
        self.push("*")
    }
}

impl HeaderPolicy for ClearSiteData {
    fn header_name(&self) -> &str {
        HEADER_NAME
    }

    fn header_value(&self) -> String {
        if self.types.is_empty() {
            return "\"*\"".to_string();
        }
        self.types
            .iter()
            .map(|data_type| format!("\"{}\"", data_type))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ClearSiteData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header_value())
    }
}
