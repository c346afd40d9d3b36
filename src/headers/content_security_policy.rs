//! `Content-Security-Policy` builder.

use std::fmt;

use super::directives::Directives;
use crate::policy::HeaderPolicy;
use crate::source::{self, Source};

const HEADER_NAME: &str = "Content-Security-Policy";
const REPORT_ONLY_HEADER_NAME: &str = "Content-Security-Policy-Report-Only";

/// Value rendered when no directive has been configured.
pub(crate) const DEFAULT_VALUE: &str =
    "default-src 'self'; script-src 'self'; style-src 'self'; object-src 'none'";

#[derive(Debug, Clone, PartialEq, Eq)]
enum CspDirective {
    Sources(Vec<Source>),
    Flag,
}

macro_rules! source_directives {
    ($($(#[$doc:meta])* $method:ident => $key:literal;)*) => {
        $(
            $(#[$doc])*
            pub fn $method<I>(self, sources: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<Source>,
            {
                self.custom_directive($key, sources)
            }
        )*
    };
}

/// Builder for the `Content-Security-Policy` header.
///
/// Each directive renders as `directive-key source1 source2`, directives are
/// joined by `"; "` in first-insertion order, and calling a directive method
/// again replaces that directive's sources without moving it. A directive
/// whose source list is empty is left out of the rendered value.
///
/// # Examples
///
/// ```
/// use secure_headers::HeaderPolicy;
/// use secure_headers::headers::ContentSecurityPolicy;
///
/// let csp = ContentSecurityPolicy::new()
///     .default_src(["'self'"])
///     .script_src(["'self'", "'strict-dynamic'"])
///     .object_src(["'none'"]);
///
/// assert_eq!(
///     csp.header_value(),
///     "default-src 'self'; script-src 'self' 'strict-dynamic'; object-src 'none'"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct ContentSecurityPolicy {
    report_only: bool,
    raw: Option<String>,
    directives: Directives<CspDirective>,
}

impl ContentSecurityPolicy {
    /// Creates an empty policy.
    ///
    /// Until a directive is added the policy renders the baseline
    /// `default-src 'self'; script-src 'self'; style-src 'self'; object-src 'none'`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats a nonce source, `'nonce-<value>'`.
    pub fn nonce(value: impl Into<String>) -> Source {
        Source::nonce(value)
    }

    /// Sets an arbitrary directive with the given sources.
    ///
    /// Use this for directives without a dedicated method.
    pub fn custom_directive<I>(mut self, directive: impl Into<String>, sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Source>,
    {
        let directive: String = directive.into();
        self.directives
            .set(directive, CspDirective::Sources(source::collect(sources)));
        self
    }

    fn flag(mut self, directive: &'static str) -> Self {
        self.directives.set(directive, CspDirective::Flag);
        self
    }

    source_directives! {
        /// `base-uri`: valid URLs for the document's `<base>` element.
        base_uri => "base-uri";
        /// `child-src`: valid sources for workers and nested browsing contexts.
        child_src => "child-src";
        /// `connect-src`: URLs loadable through script interfaces (fetch, WebSocket).
        connect_src => "connect-src";
        /// `default-src`: fallback for the other fetch directives.
        default_src => "default-src";
        /// `font-src`: valid sources for `@font-face`.
        font_src => "font-src";
        /// `form-action`: valid form submission targets.
        form_action => "form-action";
        /// `frame-ancestors`: parents allowed to embed the page.
        frame_ancestors => "frame-ancestors";
        /// `frame-src`: valid sources for frames.
        frame_src => "frame-src";
        /// `img-src`: valid image sources.
        img_src => "img-src";
        /// `manifest-src`: valid application manifest sources.
        manifest_src => "manifest-src";
        /// `media-src`: valid `<audio>`/`<video>` sources.
        media_src => "media-src";
        /// `object-src`: valid plugin sources (`<object>`, `<embed>`).
        object_src => "object-src";
        /// `report-uri`: legacy violation report endpoints.
        report_uri => "report-uri";
        /// `script-src`: valid JavaScript sources.
        script_src => "script-src";
        /// `script-src-elem`: valid `<script>` element sources.
        script_src_elem => "script-src-elem";
        /// `script-src-attr`: valid inline event handler sources.
        script_src_attr => "script-src-attr";
        /// `style-src`: valid stylesheet sources.
        style_src => "style-src";
        /// `style-src-elem`: valid `<style>`/`<link>` sources.
        style_src_elem => "style-src-elem";
        /// `style-src-attr`: valid inline style attribute sources.
        style_src_attr => "style-src-attr";
        /// `worker-src`: valid worker script sources.
        worker_src => "worker-src";
    }

    /// `report-to`: names the reporting endpoint group.
    pub fn report_to(self, group: impl Into<String>) -> Self {
        let group = group.into();
        self.custom_directive("report-to", [Source::Literal(group)])
    }

    /// `sandbox`: applies sandbox restrictions, relaxed by the given tokens.
    ///
    /// With no tokens the bare `sandbox` directive (all restrictions) is emitted.
    pub fn sandbox<I>(self, allow: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Source>,
    {
        let tokens = source::collect(allow);
        if tokens.is_empty() {
            self.flag("sandbox")
        } else {
            self.custom_directive("sandbox", tokens)
        }
    }

    /// `upgrade-insecure-requests`: rewrite `http:` URLs to `https:`.
    pub fn upgrade_insecure_requests(self) -> Self {
        self.flag("upgrade-insecure-requests")
    }

    /// `block-all-mixed-content`: block mixed-content loads (deprecated by browsers).
    pub fn block_all_mixed_content(self) -> Self {
        self.flag("block-all-mixed-content")
    }

    /// Removes a directive, if present.
    pub fn remove_directive(mut self, directive: &str) -> Self {
        self.directives.remove(directive);
        self
    }

    /// Switches the header name to `Content-Security-Policy-Report-Only`.
    pub fn report_only(mut self) -> Self {
        self.report_only = true;
        self
    }

    /// Replaces the whole policy with a raw value.
    ///
    /// Directives added afterwards are appended after the raw value.
    pub fn set(mut self, value: impl Into<String>) -> Self {
        self.directives.clear();
        self.raw = Some(value.into());
        self
    }

    /// Removes every directive and any raw value.
    pub fn clear(mut self) -> Self {
        self.directives.clear();
        self.raw = None;
        self
    }

    /// Returns the sources configured for `directive`.
    ///
    /// Boolean directives report an empty slice.
    pub fn sources(&self, directive: &str) -> Option<&[Source]> {
        self.directives.get(directive).map(|d| match d {
            CspDirective::Sources(sources) => sources.as_slice(),
            CspDirective::Flag => &[][..],
        })
    }
}

impl HeaderPolicy for ContentSecurityPolicy {
    fn header_name(&self) -> &str {
        if self.report_only {
            REPORT_ONLY_HEADER_NAME
        } else {
            HEADER_NAME
        }
    }

    fn header_value(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(raw) = &self.raw {
            parts.push(raw.clone());
        }

        for (key, directive) in self.directives.iter() {
            match directive {
                CspDirective::Flag => parts.push(key.to_string()),
                CspDirective::Sources(sources) if sources.is_empty() => {}
                CspDirective::Sources(sources) => {
                    let mut rendered = String::from(key);
                    for source in sources {
                        rendered.push(' ');
                        rendered.push_str(&source.token());
                    }
                    parts.push(rendered);
                }
            }
        }

        if parts.is_empty() {
            DEFAULT_VALUE.to_string()
        } else {
            parts.join("; ")
        }
    }
}

impl fmt::Display for ContentSecurityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header_value())
    }
}
