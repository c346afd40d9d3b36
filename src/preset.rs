//! Named presets: ready-made header sets for `strict` and `basic` deployments.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::headers::{
    CacheControl, ContentSecurityPolicy, CrossOriginEmbedderPolicy, CrossOriginOpenerPolicy,
    PermissionsPolicy, ReferrerPolicy, Server, StrictTransportSecurity, XContentTypeOptions,
    XFrameOptions, ONE_YEAR,
};
use crate::secure::Secure;
use crate::source::{EMPTY, NONE, SELF};

/// A named, fixed aggregator configuration.
///
/// `Strict` fills every role with a restrictive value; `Basic` is the
/// minimal secure subset and leaves CSP, Permissions-Policy, COOP and COEP
/// absent.
///
/// # Examples
///
/// ```
/// use secure_headers::{Preset, Secure};
///
/// let strict = Secure::from_preset(Preset::Strict);
/// assert_eq!(strict.headers().get("X-Frame-Options"), Some("DENY"));
///
/// let basic: Preset = "basic".parse().unwrap();
/// assert_eq!(Secure::from_preset(basic).headers().len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Preset {
    /// Every header, restrictive values
    Strict,
    /// Minimal secure subset
    Basic,
}

impl Preset {
    /// Builds the aggregator this preset describes.
    pub fn build(self) -> Secure {
        tracing::debug!(preset = %self, "building preset");
        match self {
            Preset::Strict => strict(),
            Preset::Basic => basic(),
        }
    }

    /// Returns the preset's name.
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Strict => "strict",
            Preset::Basic => "basic",
        }
    }
}

fn strict() -> Secure {
    Secure {
        server: Some(Server::new()),
        hsts: Some(StrictTransportSecurity::preload_ready()),
        xfo: Some(XFrameOptions::new().deny()),
        content: Some(XContentTypeOptions::new().nosniff()),
        csp: Some(
            ContentSecurityPolicy::new()
                .default_src([SELF])
                .script_src([SELF])
                .style_src([SELF])
                .object_src([NONE])
                .base_uri([NONE])
                .frame_ancestors([NONE]),
        ),
        referrer: Some(ReferrerPolicy::new().no_referrer()),
        cache: Some(CacheControl::new().no_store()),
        permissions: Some(
            PermissionsPolicy::new()
                .geolocation(EMPTY)
                .microphone(EMPTY)
                .camera(EMPTY),
        ),
        coop: Some(CrossOriginOpenerPolicy::new().same_origin()),
        coep: Some(CrossOriginEmbedderPolicy::new().require_corp()),
        custom: Vec::new(),
    }
}

fn basic() -> Secure {
    Secure {
        server: Some(Server::new()),
        hsts: Some(StrictTransportSecurity::new().max_age(ONE_YEAR)),
        xfo: Some(XFrameOptions::new().sameorigin()),
        content: Some(XContentTypeOptions::new().nosniff()),
        referrer: Some(ReferrerPolicy::new().strict_origin_when_cross_origin()),
        cache: Some(CacheControl::new().no_store()),
        ..Secure::empty()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = Error;

    /// Parses a preset name, ignoring ASCII case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.eq_ignore_ascii_case("strict") {
            Ok(Preset::Strict)
        } else if name.eq_ignore_ascii_case("basic") {
            Ok(Preset::Basic)
        } else {
            Err(Error::UnknownPreset(name.to_string()))
        }
    }
}

impl TryFrom<String> for Preset {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("STRICT".parse::<Preset>().unwrap(), Preset::Strict);
        assert_eq!("Basic".parse::<Preset>().unwrap(), Preset::Basic);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "paranoid".parse::<Preset>().unwrap_err();
        assert!(matches!(err, Error::UnknownPreset(name) if name == "paranoid"));
    }

    #[test]
    fn basic_matches_default_headers() {
        assert_eq!(Preset::Basic.build().headers(), Secure::with_default_headers().headers());
    }

    #[test]
    fn strict_populates_every_policy_role() {
        let strict = Preset::Strict.build();
        assert!(strict.csp.is_some());
        assert!(strict.permissions.is_some());
        assert!(strict.coop.is_some());
        assert!(strict.coep.is_some());
        assert!(strict.custom.is_empty());
    }
}
