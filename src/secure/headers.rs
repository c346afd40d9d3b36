//! Ordered header mapping produced by the aggregator.

use std::collections::HashMap;
use std::fmt;

/// An insertion-ordered `name -> value` mapping.
///
/// Behaves like a dictionary keyed by header name: inserting a name that is
/// already present (compared ASCII case-insensitively, as HTTP does)
/// replaces the value in place, so a name appears at most once.
///
/// # Examples
///
/// ```
/// use secure_headers::Secure;
///
/// let headers = Secure::with_default_headers().headers();
/// assert_eq!(headers.get("x-frame-options"), Some("SAMEORIGIN"));
/// assert!(!headers.contains_key("Content-Security-Policy"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecureHeaders {
    entries: Vec<(String, String)>,
}

impl SecureHeaders {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a header.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value of a header, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if the header is present.
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no headers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Iterates over header names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl fmt::Display for SecureHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

impl IntoIterator for SecureHeaders {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for SecureHeaders {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = SecureHeaders::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl From<SecureHeaders> for HashMap<String, String> {
    fn from(headers: SecureHeaders) -> Self {
        headers.entries.into_iter().collect()
    }
}
