//! Ordered directive storage shared by the multi-directive builders.

use std::borrow::Cow;

/// Directive key/value pairs kept in first-insertion order.
///
/// Setting a key that is already present replaces its value in place, so the
/// rendered order never depends on how often a directive was reconfigured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Directives<V> {
    entries: Vec<(Cow<'static, str>, V)>,
}

impl<V> Directives<V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn set(&mut self, key: impl Into<Cow<'static, str>>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (&**k, v))
    }
}

impl<V> Default for Directives<V> {
    fn default() -> Self {
        Self::new()
    }
}
