//! Chained construction of a [`Secure`] aggregator.

use super::{Role, Secure};
use crate::headers::{
    CacheControl, ContentSecurityPolicy, CrossOriginEmbedderPolicy, CrossOriginOpenerPolicy,
    CustomHeader, PermissionsPolicy, ReferrerPolicy, Server, StrictTransportSecurity,
    XContentTypeOptions, XFrameOptions,
};

/// Builder for [`Secure`].
///
/// Starts from the secure-by-default subset; each method installs a builder
/// for its role and [`without`](Self::without) makes a role absent.
///
/// # Examples
///
/// ```
/// use secure_headers::{Role, Secure};
/// use secure_headers::headers::{StrictTransportSecurity, XFrameOptions};
///
/// let secure = Secure::builder()
///     .hsts(StrictTransportSecurity::preload_ready())
///     .xfo(XFrameOptions::new().deny())
///     .without(Role::Cache)
///     .build();
///
/// let headers = secure.headers();
/// assert_eq!(headers.get("X-Frame-Options"), Some("DENY"));
/// assert!(!headers.contains_key("Cache-Control"));
/// ```
#[derive(Debug, Clone)]
#[must_use = "builder does nothing until you call build()"]
pub struct SecureBuilder {
    secure: Secure,
}

impl SecureBuilder {
    /// Creates a builder holding the default subset.
    pub fn new() -> Self {
        Self {
            secure: Secure::with_default_headers(),
        }
    }

    /// Creates a builder holding an existing aggregator, e.g. a preset.
    pub fn from_secure(secure: Secure) -> Self {
        Self { secure }
    }

    /// Sets the `Server` header.
    pub fn server(mut self, server: Server) -> Self {
        self.secure.server = Some(server);
        self
    }

    /// Sets the `Strict-Transport-Security` header.
    pub fn hsts(mut self, hsts: StrictTransportSecurity) -> Self {
        self.secure.hsts = Some(hsts);
        self
    }

    /// Sets the `X-Frame-Options` header.
    pub fn xfo(mut self, xfo: XFrameOptions) -> Self {
        self.secure.xfo = Some(xfo);
        self
    }

    /// Sets the `X-Content-Type-Options` header.
    pub fn content(mut self, content: XContentTypeOptions) -> Self {
        self.secure.content = Some(content);
        self
    }

    /// Sets the `Content-Security-Policy` header.
    pub fn csp(mut self, csp: ContentSecurityPolicy) -> Self {
        self.secure.csp = Some(csp);
        self
    }

    /// Sets the `Referrer-Policy` header.
    pub fn referrer(mut self, referrer: ReferrerPolicy) -> Self {
        self.secure.referrer = Some(referrer);
        self
    }

    /// Sets the `Cache-Control` header.
    pub fn cache(mut self, cache: CacheControl) -> Self {
        self.secure.cache = Some(cache);
        self
    }

    /// Sets the `Permissions-Policy` header.
    pub fn permissions(mut self, permissions: PermissionsPolicy) -> Self {
        self.secure.permissions = Some(permissions);
        self
    }

    /// Sets the `Cross-Origin-Opener-Policy` header.
    pub fn coop(mut self, coop: CrossOriginOpenerPolicy) -> Self {
        self.secure.coop = Some(coop);
        self
    }

    /// Sets the `Cross-Origin-Embedder-Policy` header.
    pub fn coep(mut self, coep: CrossOriginEmbedderPolicy) -> Self {
        self.secure.coep = Some(coep);
        self
    }

    /// Appends a custom header.
    pub fn custom(mut self, header: CustomHeader) -> Self {
        self.secure.custom.push(header);
        self
    }

    /// Makes a role absent.
    pub fn without(mut self, role: Role) -> Self {
        self.secure.remove(role);
        self
    }

    /// Finishes the aggregator.
    pub fn build(self) -> Secure {
        self.secure
    }
}

impl Default for SecureBuilder {
    fn default() -> Self {
        Self::new()
    }
}
