//! Declarative aggregator configuration.
//!
//! A [`SecureConfig`] is usually read from a TOML document:
//!
//! ```toml
//! preset = "basic"
//! xfo = "DENY"
//! cache = false
//! csp = "default-src 'self'"
//!
//! [[custom]]
//! name = "X-Robots-Tag"
//! value = "noindex"
//! ```
//!
//! Every role key accepts `false` (omit the header), `true` (keep the base
//! value, or install the builder default) or a string (use that raw value).
//! Unknown keys are rejected.

use serde::Deserialize;

use crate::error::Error;
use crate::headers::CustomHeader;
use crate::preset::Preset;
use crate::secure::{Role, Secure};

/// The value assigned to a single option key.
///
/// # Examples
///
/// ```
/// use secure_headers::HeaderSetting;
///
/// assert_eq!(HeaderSetting::from(false), HeaderSetting::Enabled(false));
/// assert_eq!(HeaderSetting::from("DENY"), HeaderSetting::Value("DENY".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HeaderSetting {
    /// `false` omits the header; `true` enables it with its current or default value
    Enabled(bool),
    /// Raw header value
    Value(String),
}

impl From<bool> for HeaderSetting {
    fn from(enabled: bool) -> Self {
        HeaderSetting::Enabled(enabled)
    }
}

impl From<&str> for HeaderSetting {
    fn from(value: &str) -> Self {
        HeaderSetting::Value(value.to_string())
    }
}

impl From<String> for HeaderSetting {
    fn from(value: String) -> Self {
        HeaderSetting::Value(value)
    }
}

/// A `[[custom]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomHeaderConfig {
    /// Header name
    pub name: String,
    /// Header value
    pub value: String,
}

/// Aggregator configuration as read from a file.
///
/// Settings are applied on top of `preset` (or the default subset when no
/// preset is named), then `custom` entries are appended in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecureConfig {
    /// Base preset
    pub preset: Option<Preset>,
    /// `Server`
    pub server: Option<HeaderSetting>,
    /// `Strict-Transport-Security`
    pub hsts: Option<HeaderSetting>,
    /// `X-Frame-Options`
    pub xfo: Option<HeaderSetting>,
    /// `X-Content-Type-Options`
    pub content: Option<HeaderSetting>,
    /// `Content-Security-Policy`
    pub csp: Option<HeaderSetting>,
    /// `Referrer-Policy`
    pub referrer: Option<HeaderSetting>,
    /// `Cache-Control`
    pub cache: Option<HeaderSetting>,
    /// `Permissions-Policy`
    pub permissions: Option<HeaderSetting>,
    /// `Cross-Origin-Opener-Policy`
    pub coop: Option<HeaderSetting>,
    /// `Cross-Origin-Embedder-Policy`
    pub coep: Option<HeaderSetting>,
    /// Additional headers
    pub custom: Vec<CustomHeaderConfig>,
}

impl SecureConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed TOML, an unknown key, a value
    /// of the wrong type or an unknown preset name.
    pub fn from_toml(document: &str) -> Result<Self, Error> {
        let config: SecureConfig = toml::from_str(document)?;
        tracing::debug!(preset = ?config.preset, custom = config.custom.len(), "parsed header config");
        Ok(config)
    }

    /// Builds the aggregator this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCustomHeader`] for a custom entry with an
    /// empty name.
    pub fn into_secure(self) -> Result<Secure, Error> {
        let mut secure = match self.preset {
            Some(preset) => preset.build(),
            None => Secure::with_default_headers(),
        };

        let settings = [
            (Role::Server, self.server),
            (Role::Hsts, self.hsts),
            (Role::Xfo, self.xfo),
            (Role::Content, self.content),
            (Role::Csp, self.csp),
            (Role::Referrer, self.referrer),
            (Role::Cache, self.cache),
            (Role::Permissions, self.permissions),
            (Role::Coop, self.coop),
            (Role::Coep, self.coep),
        ];
        for (role, setting) in settings {
            if let Some(setting) = setting {
                tracing::trace!(role = %role, ?setting, "applying setting");
                secure.apply(role, setting)?;
            }
        }

        for entry in self.custom {
            if entry.name.trim().is_empty() {
                return Err(Error::InvalidCustomHeader(format!(": {}", entry.value)));
            }
            secure.custom.push(CustomHeader::new(entry.name, entry.value));
        }

        Ok(secure)
    }
}

impl Secure {
    /// Builds an aggregator from a parsed configuration.
    ///
    /// # Errors
    ///
    /// See [`SecureConfig::into_secure`].
    pub fn from_config(config: SecureConfig) -> Result<Self, Error> {
        config.into_secure()
    }

    /// Parses a TOML document and builds the aggregator it describes.
    ///
    /// # Errors
    ///
    /// See [`SecureConfig::from_toml`] and [`SecureConfig::into_secure`].
    ///
    /// # Examples
    ///
    /// ```
    /// use secure_headers::Secure;
    ///
    /// let secure = Secure::from_toml("preset = \"strict\"\ncoep = false").unwrap();
    /// assert!(!secure.headers().contains_key("Cross-Origin-Embedder-Policy"));
    /// assert_eq!(secure.headers().get("X-Frame-Options"), Some("DENY"));
    /// ```
    pub fn from_toml(document: &str) -> Result<Self, Error> {
        SecureConfig::from_toml(document)?.into_secure()
    }
}
