//! `Server` builder.

use std::borrow::Cow;

/// Builder for the `Server` header.
///
/// Defaults to the empty string, which blanks out whatever `Server` value the
/// web framework would otherwise advertise.
///
/// # Examples
///
/// ```
/// use secure_headers::HeaderPolicy;
/// use secure_headers::headers::Server;
///
/// assert_eq!(Server::new().header_value(), "");
/// assert_eq!(Server::new().set("webserver").header_value(), "webserver");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Server {
    value: Cow<'static, str>,
}

impl Server {
    /// Creates a builder rendering an empty value.
    pub fn new() -> Self {
        Self {
            value: Cow::Borrowed(""),
        }
    }
}

single_value_header!(Server, "Server");
