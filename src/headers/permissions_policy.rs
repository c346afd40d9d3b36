//! `Permissions-Policy` builder.

use std::fmt;

use super::directives::Directives;
use crate::policy::HeaderPolicy;
use crate::source::{self, Source};

const HEADER_NAME: &str = "Permissions-Policy";

pub(crate) const DEFAULT_VALUE: &str = "geolocation=(), microphone=(), camera=()";

macro_rules! features {
    ($($method:ident => $key:literal;)*) => {
        $(
            #[doc = concat!("Sets the `", $key, "` allowlist. An empty allowlist disables the feature.")]
            pub fn $method<I>(self, allowlist: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<Source>,
            {
                self.add_directive($key, allowlist)
            }
        )*
    };
}

/// Builder for the `Permissions-Policy` header.
///
/// Each feature renders as `feature=(allow1 allow2)` and features are joined
/// by `", "` in first-insertion order. An empty allowlist renders
/// `feature=()`, disabling the feature entirely. Allowlist tokens render
/// exactly as written, so quote origins yourself when the browser expects it.
///
/// # Examples
///
/// ```
/// use secure_headers::HeaderPolicy;
/// use secure_headers::headers::PermissionsPolicy;
/// use secure_headers::source::{self, EMPTY};
///
/// let policy = PermissionsPolicy::new()
///     .geolocation(EMPTY)
///     .camera(EMPTY)
///     .fullscreen([source::SELF, "\"https://player.example\"".into()]);
///
/// assert_eq!(
///     policy.header_value(),
///     "geolocation=(), camera=(), fullscreen=('self' \"https://player.example\")"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct PermissionsPolicy {
    raw: Option<String>,
    directives: Directives<Vec<Source>>,
}

impl PermissionsPolicy {
    /// Creates an empty policy.
    ///
    /// Until a feature is added the policy renders
    /// `geolocation=(), microphone=(), camera=()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the allowlist of an arbitrary feature.
    pub fn add_directive<I>(mut self, feature: impl Into<String>, allowlist: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Source>,
    {
        let feature: String = feature.into();
        self.directives.set(feature, source::collect(allowlist));
        self
    }

    /// Removes a feature, if present.
    pub fn remove_directive(mut self, feature: &str) -> Self {
        self.directives.remove(feature);
        self
    }

    /// Replaces the whole policy with a raw value.
    ///
    /// Features added afterwards are appended after the raw value.
    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.directives.clear();
        self.raw = Some(value.into());
        self
    }

    /// Removes every feature and any raw value.
    pub fn clear(mut self) -> Self {
        self.directives.clear();
        self.raw = None;
        self
    }

    /// Returns the allowlist configured for `feature`.
    pub fn allowlist(&self, feature: &str) -> Option<&[Source]> {
        self.directives.get(feature).map(Vec::as_slice)
    }

    features! {
        accelerometer => "accelerometer";
        ambient_light_sensor => "ambient-light-sensor";
        autoplay => "autoplay";
        battery => "battery";
        bluetooth => "bluetooth";
        camera => "camera";
        clipboard_read => "clipboard-read";
        clipboard_write => "clipboard-write";
        cross_origin_isolated => "cross-origin-isolated";
        display_capture => "display-capture";
        document_domain => "document-domain";
        encrypted_media => "encrypted-media";
        execution_while_not_rendered => "execution-while-not-rendered";
        execution_while_out_of_viewport => "execution-while-out-of-viewport";
        fullscreen => "fullscreen";
        gamepad => "gamepad";
        geolocation => "geolocation";
        gyroscope => "gyroscope";
        hid => "hid";
        idle_detection => "idle-detection";
        magnetometer => "magnetometer";
        microphone => "microphone";
        midi => "midi";
        navigation_override => "navigation-override";
        payment => "payment";
        picture_in_picture => "picture-in-picture";
        publickey_credentials_get => "publickey-credentials-get";
        screen_wake_lock => "screen-wake-lock";
        serial => "serial";
        speaker_selection => "speaker-selection";
        sync_xhr => "sync-xhr";
        usb => "usb";
        web_share => "web-share";
        xr_spatial_tracking => "xr-spatial-tracking";
    }
}

impl HeaderPolicy for PermissionsPolicy {
    fn header_name(&self) -> &str {
        HEADER_NAME
    }

    fn header_value(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(raw) = &self.raw {
            parts.push(raw.clone());
        }

        for (feature, allowlist) in self.directives.iter() {
            let tokens: Vec<_> = allowlist.iter().map(Source::token).collect();
            parts.push(format!("{}=({})", feature, tokens.join(" ")));
        }

        if parts.is_empty() {
            DEFAULT_VALUE.to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl fmt::Display for PermissionsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header_value())
    }
}
