//! The `Secure` aggregator.

use std::fmt;

use super::{Role, SecureBuilder, SecureHeaders};
use crate::config::HeaderSetting;
use crate::error::Error;
use crate::headers::{
    CacheControl, ContentSecurityPolicy, CrossOriginEmbedderPolicy, CrossOriginOpenerPolicy,
    CustomHeader, PermissionsPolicy, ReferrerPolicy, Server, StrictTransportSecurity,
    XContentTypeOptions, XFrameOptions,
};
use crate::policy::HeaderPolicy;
use crate::preset::Preset;
use crate::web::{SetHeader, SetHeaderAsync};

/// The full set of security headers applied to every response.
///
/// Each role holds an optional builder; `None` means the header is omitted
/// entirely (never emitted with an empty value). Build one `Secure` at
/// startup and share it read-only across request handlers: it holds no
/// per-request state and is `Send + Sync`.
///
/// Mutating a shared instance after startup is not synchronized; configure
/// it fully before handing it out (e.g. behind an `Arc`).
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use secure_headers::Secure;
/// use secure_headers::headers::ContentSecurityPolicy;
///
/// let secure = Secure::builder()
///     .csp(ContentSecurityPolicy::new().default_src(["'self'"]))
///     .build();
///
/// let mut response: HashMap<String, String> = HashMap::new();
/// secure.set_headers(&mut response).unwrap();
///
/// assert_eq!(response["Content-Security-Policy"], "default-src 'self'");
/// assert_eq!(response["X-Content-Type-Options"], "nosniff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secure {
    /// `Server`
    pub server: Option<Server>,
    /// `Strict-Transport-Security`
    pub hsts: Option<StrictTransportSecurity>,
    /// `X-Frame-Options`
    pub xfo: Option<XFrameOptions>,
    /// `X-Content-Type-Options`
    pub content: Option<XContentTypeOptions>,
    /// `Content-Security-Policy`
    pub csp: Option<ContentSecurityPolicy>,
    /// `Referrer-Policy`
    pub referrer: Option<ReferrerPolicy>,
    /// `Cache-Control`
    pub cache: Option<CacheControl>,
    /// `Permissions-Policy`
    pub permissions: Option<PermissionsPolicy>,
    /// `Cross-Origin-Opener-Policy`
    pub coop: Option<CrossOriginOpenerPolicy>,
    /// `Cross-Origin-Embedder-Policy`
    pub coep: Option<CrossOriginEmbedderPolicy>,
    /// Additional headers, emitted after the policy headers
    pub custom: Vec<CustomHeader>,
}

impl Secure {
    /// An aggregator with every role absent. Emits no headers.
    pub fn empty() -> Self {
        Self {
            server: None,
            hsts: None,
            xfo: None,
            content: None,
            csp: None,
            referrer: None,
            cache: None,
            permissions: None,
            coop: None,
            coep: None,
            custom: Vec::new(),
        }
    }

    /// The secure-by-default subset.
    ///
    /// Sets an empty `Server`, `Strict-Transport-Security: max-age=31536000`,
    /// `X-Frame-Options: SAMEORIGIN`, `X-Content-Type-Options: nosniff`,
    /// `Referrer-Policy: strict-origin-when-cross-origin` and
    /// `Cache-Control: no-store`. CSP, Permissions-Policy and the
    /// cross-origin policies stay absent because they are application-specific.
    pub fn with_default_headers() -> Self {
        Self {
            server: Some(Server::new()),
            hsts: Some(StrictTransportSecurity::new()),
            xfo: Some(XFrameOptions::new()),
            content: Some(XContentTypeOptions::new()),
            referrer: Some(ReferrerPolicy::new()),
            cache: Some(CacheControl::new()),
            ..Self::empty()
        }
    }

    /// Returns a builder starting from [`with_default_headers`](Self::with_default_headers).
    pub fn builder() -> SecureBuilder {
        SecureBuilder::new()
    }

    /// Builds the aggregator described by a preset.
    pub fn from_preset(preset: Preset) -> Self {
        preset.build()
    }

    /// Builds the aggregator for a preset given by name (`strict` or `basic`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPreset`] for any other name.
    pub fn from_preset_name(name: &str) -> Result<Self, Error> {
        Ok(Self::from_preset(name.parse()?))
    }

    /// Builds an aggregator from `(option key, setting)` pairs applied on top
    /// of the default subset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOption`] on the first key that does not name a
    /// [`Role`]; no aggregator is produced in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use secure_headers::{Error, HeaderSetting, Secure};
    ///
    /// let secure = Secure::from_options([
    ///     ("xfo", HeaderSetting::from("DENY")),
    ///     ("cache", HeaderSetting::from(false)),
    /// ])
    /// .unwrap();
    /// assert_eq!(secure.headers().get("X-Frame-Options"), Some("DENY"));
    /// assert!(!secure.headers().contains_key("Cache-Control"));
    ///
    /// let err = Secure::from_options([("xss", HeaderSetting::from(true))]).unwrap_err();
    /// assert!(matches!(err, Error::UnknownOption(key) if key == "xss"));
    /// ```
    pub fn from_options<I, K>(options: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, HeaderSetting)>,
        K: AsRef<str>,
    {
        let mut secure = Self::with_default_headers();
        for (key, setting) in options {
            let role: Role = key.as_ref().parse()?;
            secure.apply(role, setting)?;
        }
        Ok(secure)
    }

    /// Applies a single setting to a role.
    ///
    /// `false` makes the role absent, `true` keeps the configured builder
    /// (or installs the builder default when the role was absent), and a
    /// string installs that raw header value. For [`Role::Custom`] a string
    /// must have the form `Name: value` and is appended to the custom list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCustomHeader`] for a custom string without a
    /// `:` separator or with an empty name, and [`Error::EmptyValue`] for a
    /// blank string on any role other than [`Role::Server`].
    pub fn apply(&mut self, role: Role, setting: HeaderSetting) -> Result<(), Error> {
        match setting {
            HeaderSetting::Enabled(false) => self.remove(role),
            HeaderSetting::Enabled(true) => self.enable(role),
            HeaderSetting::Value(value) => self.set_raw(role, value)?,
        }
        Ok(())
    }

    fn enable(&mut self, role: Role) {
        match role {
            Role::Server => {
                self.server.get_or_insert_with(Server::new);
            }
            Role::Hsts => {
                self.hsts.get_or_insert_with(StrictTransportSecurity::new);
            }
            Role::Xfo => {
                self.xfo.get_or_insert_with(XFrameOptions::new);
            }
            Role::Content => {
                self.content.get_or_insert_with(XContentTypeOptions::new);
            }
            Role::Csp => {
                self.csp.get_or_insert_with(ContentSecurityPolicy::new);
            }
            Role::Referrer => {
                self.referrer.get_or_insert_with(ReferrerPolicy::new);
            }
            Role::Cache => {
                self.cache.get_or_insert_with(CacheControl::new);
            }
            Role::Permissions => {
                self.permissions.get_or_insert_with(PermissionsPolicy::new);
            }
            Role::Coop => {
                self.coop.get_or_insert_with(CrossOriginOpenerPolicy::new);
            }
            Role::Coep => {
                self.coep.get_or_insert_with(CrossOriginEmbedderPolicy::new);
            }
            Role::Custom => {}
        }
    }

    fn set_raw(&mut self, role: Role, value: String) -> Result<(), Error> {
        // Server may be empty; custom values are checked below
        if value.trim().is_empty() && !matches!(role, Role::Server | Role::Custom) {
            return Err(Error::EmptyValue(role.key().to_string()));
        }

        match role {
            Role::Server => self.server = Some(Server::new().set(value)),
            Role::Hsts => self.hsts = Some(StrictTransportSecurity::new().set(value)),
            Role::Xfo => self.xfo = Some(XFrameOptions::new().set(value)),
            Role::Content => self.content = Some(XContentTypeOptions::new().set(value)),
            Role::Csp => self.csp = Some(ContentSecurityPolicy::new().set(value)),
            Role::Referrer => self.referrer = Some(ReferrerPolicy::new().set(value)),
            Role::Cache => self.cache = Some(CacheControl::new().set(value)),
            Role::Permissions => self.permissions = Some(PermissionsPolicy::new().set(value)),
            Role::Coop => self.coop = Some(CrossOriginOpenerPolicy::new().set(value)),
            Role::Coep => self.coep = Some(CrossOriginEmbedderPolicy::new().set(value)),
            Role::Custom => {
                let header = match value.split_once(':') {
                    Some((name, header_value)) if !name.trim().is_empty() => {
                        CustomHeader::new(name.trim(), header_value.trim())
                    }
                    _ => return Err(Error::InvalidCustomHeader(value)),
                };
                self.custom.push(header);
            }
        }
        Ok(())
    }

    /// Makes a role absent. For [`Role::Custom`] the custom list is emptied.
    pub fn remove(&mut self, role: Role) {
        match role {
            Role::Server => self.server = None,
            Role::Hsts => self.hsts = None,
            Role::Xfo => self.xfo = None,
            Role::Content => self.content = None,
            Role::Csp => self.csp = None,
            Role::Referrer => self.referrer = None,
            Role::Cache => self.cache = None,
            Role::Permissions => self.permissions = None,
            Role::Coop => self.coop = None,
            Role::Coep => self.coep = None,
            Role::Custom => self.custom.clear(),
        }
    }

    /// Returns `true` if the role contributes at least one header.
    pub fn is_present(&self, role: Role) -> bool {
        match role {
            Role::Server => self.server.is_some(),
            Role::Hsts => self.hsts.is_some(),
            Role::Xfo => self.xfo.is_some(),
            Role::Content => self.content.is_some(),
            Role::Csp => self.csp.is_some(),
            Role::Referrer => self.referrer.is_some(),
            Role::Cache => self.cache.is_some(),
            Role::Permissions => self.permissions.is_some(),
            Role::Coop => self.coop.is_some(),
            Role::Coep => self.coep.is_some(),
            Role::Custom => !self.custom.is_empty(),
        }
    }

    /// Present builders in emission order.
    fn policies(&self) -> Vec<&dyn HeaderPolicy> {
        fn push<'a, P: HeaderPolicy>(out: &mut Vec<&'a dyn HeaderPolicy>, policy: &'a Option<P>) {
            if let Some(policy) = policy {
                out.push(policy);
            }
        }

        let mut policies: Vec<&dyn HeaderPolicy> = Vec::new();
        push(&mut policies, &self.server);
        push(&mut policies, &self.csp);
        push(&mut policies, &self.coop);
        push(&mut policies, &self.coep);
        push(&mut policies, &self.hsts);
        push(&mut policies, &self.permissions);
        push(&mut policies, &self.referrer);
        push(&mut policies, &self.cache);
        policies.extend(self.custom.iter().map(|header| header as &dyn HeaderPolicy));
        push(&mut policies, &self.content);
        push(&mut policies, &self.xfo);
        policies
    }

    /// Computes the header mapping.
    ///
    /// Headers appear in a fixed order: `Server`, CSP, COOP, COEP, HSTS,
    /// `Permissions-Policy`, `Referrer-Policy`, `Cache-Control`, custom
    /// headers, `X-Content-Type-Options`, `X-Frame-Options`. A custom header
    /// reusing a policy header's name overrides that value in place.
    pub fn headers(&self) -> SecureHeaders {
        self.policies()
            .into_iter()
            .map(|policy| (policy.header_name().to_string(), policy.header_value()))
            .collect()
    }

    /// Number of headers [`headers`](Self::headers) would return.
    pub fn len(&self) -> usize {
        self.headers().len()
    }

    /// Returns `true` if no header would be emitted.
    pub fn is_empty(&self) -> bool {
        self.policies().is_empty()
    }

    /// Writes every header onto `response`, overwriting existing values.
    ///
    /// Headers are written sequentially in [`headers`](Self::headers) order.
    /// Calling this twice on the same response leaves the same headers as
    /// calling it once.
    ///
    /// # Errors
    ///
    /// Stops at the first header the adapter rejects and returns its error
    /// unchanged.
    pub fn set_headers<R>(&self, response: &mut R) -> Result<(), R::Error>
    where
        R: SetHeader + ?Sized,
    {
        let headers = self.headers();
        tracing::debug!(count = headers.len(), "applying security headers");
        for (name, value) in headers.iter() {
            tracing::trace!(header = name, "setting header");
            response.set_header(name, value)?;
        }
        Ok(())
    }

    /// Asynchronous counterpart of [`set_headers`](Self::set_headers) for
    /// responses whose header mutation is itself awaited.
    ///
    /// Headers are still written one after another, in the same order.
    ///
    /// # Errors
    ///
    /// Stops at the first header the adapter rejects and returns its error
    /// unchanged.
    pub async fn set_headers_async<R>(&self, response: &mut R) -> Result<(), R::Error>
    where
        R: SetHeaderAsync + ?Sized,
    {
        let headers = self.headers();
        tracing::debug!(count = headers.len(), "applying security headers (async)");
        for (name, value) in headers.iter() {
            tracing::trace!(header = name, "setting header");
            response.set_header_async(name, value).await?;
        }
        Ok(())
    }
}

impl Default for Secure {
    fn default() -> Self {
        Self::with_default_headers()
    }
}

impl fmt::Display for Secure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.headers(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{EMPTY, SELF};

    #[test]
    fn default_subset() {
        let headers = Secure::default().headers();
        let names: Vec<_> = headers.names().collect();
        assert_eq!(
            names,
            vec![
                "Server",
                "Strict-Transport-Security",
                "Referrer-Policy",
                "Cache-Control",
                "X-Content-Type-Options",
                "X-Frame-Options",
            ]
        );
        assert_eq!(headers.get("Server"), Some(""));
    }

    #[test]
    fn absent_roles_are_not_keys() {
        let secure = Secure::with_default_headers();
        let headers = secure.headers();
        assert!(!headers.contains_key("Content-Security-Policy"));
        assert!(!headers.contains_key("Permissions-Policy"));
        assert!(!headers.contains_key("Cross-Origin-Opener-Policy"));
    }

    #[test]
    fn canonical_order_with_every_role() {
        let mut secure = Secure::with_default_headers();
        secure.csp = Some(ContentSecurityPolicy::new().default_src([SELF]));
        secure.coop = Some(CrossOriginOpenerPolicy::new());
        secure.coep = Some(CrossOriginEmbedderPolicy::new());
        secure.permissions = Some(PermissionsPolicy::new().usb(EMPTY));
        secure.custom.push(CustomHeader::new("X-Custom", "1"));

        let names: Vec<String> = secure.headers().names().map(String::from).collect();
        assert_eq!(
            names,
            vec![
                "Server",
                "Content-Security-Policy",
                "Cross-Origin-Opener-Policy",
                "Cross-Origin-Embedder-Policy",
                "Strict-Transport-Security",
                "Permissions-Policy",
                "Referrer-Policy",
                "Cache-Control",
                "X-Custom",
                "X-Content-Type-Options",
                "X-Frame-Options",
            ]
        );
    }

    #[test]
    fn custom_header_overrides_policy_header_in_place() {
        let mut secure = Secure::with_default_headers();
        secure.custom.push(CustomHeader::new("Server", "edge"));

        let headers = secure.headers();
        assert_eq!(headers.get("Server"), Some("edge"));
        assert_eq!(headers.names().next(), Some("Server"));
        assert_eq!(headers.len(), 6);
    }

    #[test]
    fn remove_and_enable() {
        let mut secure = Secure::with_default_headers();
        secure.remove(Role::Hsts);
        assert!(!secure.is_present(Role::Hsts));

        secure.apply(Role::Hsts, HeaderSetting::Enabled(true)).unwrap();
        assert_eq!(secure.headers().get("Strict-Transport-Security"), Some("max-age=31536000"));

        secure.hsts = Some(StrictTransportSecurity::preload_ready());
        secure.apply(Role::Hsts, HeaderSetting::Enabled(true)).unwrap();
        assert_eq!(
            secure.headers().get("Strict-Transport-Security"),
            Some("max-age=63072000; includeSubDomains; preload")
        );
    }

    #[test]
    fn custom_setting_parses_name_and_value() {
        let mut secure = Secure::empty();
        secure
            .apply(Role::Custom, HeaderSetting::from("X-Robots-Tag: noindex"))
            .unwrap();
        assert_eq!(secure.headers().get("X-Robots-Tag"), Some("noindex"));

        let err = secure
            .apply(Role::Custom, HeaderSetting::from("no separator"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCustomHeader(_)));
    }

    #[test]
    fn blank_raw_value_is_rejected() {
        for role in Role::ALL {
            let result = Secure::from_options([(role.key(), HeaderSetting::from(""))]);
            match role {
                Role::Server => {
                    let secure = result.unwrap();
                    assert_eq!(secure.headers().get("Server"), Some(""));
                }
                Role::Custom => {
                    assert!(matches!(result, Err(Error::InvalidCustomHeader(_))));
                }
                _ => {
                    assert!(
                        matches!(result, Err(Error::EmptyValue(ref key)) if key == role.key()),
                        "{} accepted a blank value",
                        role
                    );
                }
            }
        }

        let mut secure = Secure::with_default_headers();
        let err = secure
            .apply(Role::Hsts, HeaderSetting::from(" "))
            .unwrap_err();
        assert!(matches!(err, Error::EmptyValue(_)));
        assert_eq!(
            secure.headers().get("Strict-Transport-Security"),
            Some("max-age=31536000")
        );
    }

    #[test]
    fn empty_aggregator_emits_nothing() {
        let secure = Secure::empty();
        assert!(secure.is_empty());
        assert_eq!(secure.len(), 0);
        assert_eq!(secure.to_string(), "");
    }

    #[test]
    fn display_lists_headers() {
        let mut secure = Secure::empty();
        secure.xfo = Some(XFrameOptions::new().deny());
        secure.content = Some(XContentTypeOptions::new());
        assert_eq!(
            secure.to_string(),
            "X-Content-Type-Options: nosniff\nX-Frame-Options: DENY"
        );
    }

    #[test]
    fn secure_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Secure>();
    }
}
