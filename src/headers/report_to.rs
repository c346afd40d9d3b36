//! `Report-To` builder.

use std::fmt;

use serde_json::{json, Map, Value};

use crate::policy::HeaderPolicy;

const HEADER_NAME: &str = "Report-To";

/// One collector URL in a [`ReportTo`] group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ReportEndpoint {
    url: String,
    priority: Option<u32>,
    weight: Option<u32>,
}

impl ReportEndpoint {
    /// Creates an endpoint for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            priority: None,
            weight: None,
        }
    }

    /// Failover class; lower values are tried first.
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Load-balancing weight within one priority class.
    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    fn to_json(&self) -> Value {
        let mut endpoint = Map::new();
        endpoint.insert("url".to_string(), json!(self.url));
        if let Some(priority) = self.priority {
            endpoint.insert("priority".to_string(), json!(priority));
        }
        if let Some(weight) = self.weight {
            endpoint.insert("weight".to_string(), json!(weight));
        }
        Value::Object(endpoint)
    }
}

impl From<&str> for ReportEndpoint {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for ReportEndpoint {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

/// Builder for the `Report-To` header.
///
/// Renders one endpoint group as a JSON object with `max_age` and an
/// `endpoints` array, plus `group` and `include_subdomains` when they are
/// set. Keys are emitted in sorted order. This header is not an aggregator
/// role; add it through [`CustomHeader::from_policy`](super::CustomHeader::from_policy)
/// next to a CSP that names the group in `report-to`.
///
/// # Examples
///
/// ```
/// use secure_headers::HeaderPolicy;
/// use secure_headers::headers::ReportTo;
///
/// let report_to = ReportTo::new(10886400)
///     .group("csp-endpoint")
///     .endpoint("https://reports.example/csp");
///
/// assert_eq!(
///     report_to.header_value(),
///     r#"{"endpoints":[{"url":"https://reports.example/csp"}],"group":"csp-endpoint","max_age":10886400}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ReportTo {
    raw: Option<String>,
    max_age: u64,
    include_subdomains: bool,
    group: Option<String>,
    endpoints: Vec<ReportEndpoint>,
}

impl ReportTo {
    /// Creates a group whose endpoints stay cached for `max_age` seconds.
    pub fn new(max_age: u64) -> Self {
        Self {
            raw: None,
            max_age,
            include_subdomains: false,
            group: None,
            endpoints: Vec::new(),
        }
    }

    /// Replaces the cache lifetime.
    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = seconds;
        self
    }

    /// Applies the group to subdomains of the origin too.
    pub fn include_subdomains(mut self) -> Self {
        self.include_subdomains = true;
        self
    }

    /// Names the group. Without a name browsers use `default`.
    pub fn group(mut self, name: impl Into<String>) -> Self {
        self.group = Some(name.into());
        self
    }

    /// Appends an endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<ReportEndpoint>) -> Self {
        self.endpoints.push(endpoint.into());
        self
    }

    /// Replaces the rendered value with an arbitrary string.
    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.raw = Some(value.into());
        self
    }

    fn to_json(&self) -> Value {
        let mut group = Map::new();
        group.insert("max_age".to_string(), json!(self.max_age));
        group.insert(
            "endpoints".to_string(),
            self.endpoints.iter().map(ReportEndpoint::to_json).collect(),
        );
        if let Some(name) = &self.group {
            group.insert("group".to_string(), json!(name));
        }
        if self.include_subdomains {
            group.insert("include_subdomains".to_string(), Value::Bool(true));
        }
        Value::Object(group)
    }
}

impl HeaderPolicy for ReportTo {
    fn header_name(&self) -> &str {
        HEADER_NAME
    }

    fn header_value(&self) -> String {
        match &self.raw {
            Some(raw) => raw.clone(),
            None => self.to_json().to_string(),
        }
    }
}

impl fmt::Display for ReportTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::CustomHeader;

    #[test]
    fn minimal_group() {
        let report_to = ReportTo::new(60);
        assert_eq!(report_to.header_name(), "Report-To");
        assert_eq!(report_to.header_value(), r#"{"endpoints":[],"max_age":60}"#);
    }

    #[test]
    fn optional_members_are_included_when_set() {
        let report_to = ReportTo::new(86400)
            .include_subdomains()
            .group("default")
            .endpoint(ReportEndpoint::new("https://a.example/r").priority(1))
            .endpoint(ReportEndpoint::new("https://b.example/r").priority(2).weight(5));

        let parsed: Value = serde_json::from_str(&report_to.header_value()).unwrap();
        assert_eq!(
            parsed,
            json!({
                "max_age": 86400,
                "group": "default",
                "include_subdomains": true,
                "endpoints": [
                    {"url": "https://a.example/r", "priority": 1},
                    {"url": "https://b.example/r", "priority": 2, "weight": 5}
                ]
            })
        );
    }

    #[test]
    fn endpoint_urls_are_escaped() {
        let report_to = ReportTo::new(1).endpoint("https://a.example/r?q=\"x\"");
        let parsed: Value = serde_json::from_str(&report_to.header_value()).unwrap();
        assert_eq!(parsed["endpoints"][0]["url"], "https://a.example/r?q=\"x\"");
    }

    #[test]
    fn set_replaces_rendered_value() {
        let report_to = ReportTo::new(60).group("csp").set("{\"max_age\":1}");
        assert_eq!(report_to.to_string(), "{\"max_age\":1}");
    }

    #[test]
    fn usable_as_custom_header() {
        let header = CustomHeader::from_policy(&ReportTo::new(60).max_age(120));
        assert_eq!(header.header_name(), "Report-To");
        assert_eq!(header.header_value(), r#"{"endpoints":[],"max_age":120}"#);
    }
}
