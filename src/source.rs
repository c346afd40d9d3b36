//! Source tokens shared by `Content-Security-Policy` and `Permissions-Policy`.
//!
//! Directive methods accept anything convertible into a [`Source`], so plain
//! string literals keep working while the keyword tokens are recognised.
//! Every source renders as the token it was written as, in either header.
//!
//! ```
//! use secure_headers::source::{self, Source};
//!
//! assert_eq!(Source::from("'self'"), source::SELF);
//! assert_eq!(Source::nonce("r4nd0m").to_string(), "'nonce-r4nd0m'");
//! assert_eq!(
//!     Source::from("https://cdn.example.com"),
//!     Source::Literal("https://cdn.example.com".to_string())
//! );
//! ```

use std::borrow::Cow;
use std::fmt;

/// `'self'`
pub const SELF: Source = Source::SelfOrigin;
/// `'none'`
pub const NONE: Source = Source::None;
/// `'unsafe-inline'`
pub const UNSAFE_INLINE: Source = Source::UnsafeInline;
/// `'unsafe-eval'`
pub const UNSAFE_EVAL: Source = Source::UnsafeEval;
/// `'strict-dynamic'`
pub const STRICT_DYNAMIC: Source = Source::StrictDynamic;
/// `*`
pub const WILDCARD: Source = Source::Wildcard;

/// An empty source list.
///
/// Passing it to a `Permissions-Policy` feature disables the feature
/// (`camera=()`); passing it to a CSP fetch directive omits the directive.
pub const EMPTY: [Source; 0] = [];

/// Digest algorithm of a CSP hash source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// `sha256`
    Sha256,
    /// `sha384`
    Sha384,
    /// `sha512`
    Sha512,
}

impl HashAlgorithm {
    /// Returns the token used in the source expression.
    pub fn as_str(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    fn from_prefix(token: &str) -> Option<(Self, &str)> {
        [Self::Sha256, Self::Sha384, Self::Sha512]
            .into_iter()
            .find_map(|alg| {
                token
                    .strip_prefix(alg.as_str())
                    .and_then(|rest| rest.strip_prefix('-'))
                    .map(|digest| (alg, digest))
            })
    }
}

/// A single entry of a source list or allowlist.
///
/// Rendering is exhaustive: every variant has a defined spelling in both
/// header contexts, so an unrecognised token can never be mis-rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// `'self'` (`self` in a permissions allowlist)
    SelfOrigin,
    /// `'none'`
    None,
    /// `'unsafe-inline'`
    UnsafeInline,
    /// `'unsafe-eval'`
    UnsafeEval,
    /// `'unsafe-hashes'`
    UnsafeHashes,
    /// `'strict-dynamic'`
    StrictDynamic,
    /// `'report-sample'`
    ReportSample,
    /// `'wasm-unsafe-eval'`
    WasmUnsafeEval,
    /// `*`
    Wildcard,
    /// `'nonce-<value>'`
    Nonce(String),
    /// `'<algorithm>-<digest>'`
    Hash {
        /// Digest algorithm
        algorithm: HashAlgorithm,
        /// Base64-encoded digest
        digest: String,
    },
    /// `*.<domain>`, matching every subdomain of a host
    Subdomains(String),
    /// Any other host, scheme or origin, rendered verbatim
    Literal(String),
}

impl Source {
    /// Builds a nonce source, rendered as `'nonce-<value>'`.
    pub fn nonce(value: impl Into<String>) -> Self {
        Source::Nonce(value.into())
    }

    /// Builds a `sha256` hash source.
    pub fn sha256(digest: impl Into<String>) -> Self {
        Source::Hash {
            algorithm: HashAlgorithm::Sha256,
            digest: digest.into(),
        }
    }

    /// Builds a `sha384` hash source.
    pub fn sha384(digest: impl Into<String>) -> Self {
        Source::Hash {
            algorithm: HashAlgorithm::Sha384,
            digest: digest.into(),
        }
    }

    /// Builds a `sha512` hash source.
    pub fn sha512(digest: impl Into<String>) -> Self {
        Source::Hash {
            algorithm: HashAlgorithm::Sha512,
            digest: digest.into(),
        }
    }

    /// Builds a wildcard host source covering every subdomain of `domain`.
    ///
    /// ```
    /// use secure_headers::source::Source;
    ///
    /// assert_eq!(Source::subdomains("example.com").to_string(), "*.example.com");
    /// ```
    pub fn subdomains(domain: impl Into<String>) -> Self {
        Source::Subdomains(domain.into())
    }

    /// Renders the token as it appears in a source list or allowlist.
    pub fn token(&self) -> Cow<'_, str> {
        match self {
            Source::SelfOrigin => Cow::Borrowed("'self'"),
            Source::None => Cow::Borrowed("'none'"),
            Source::UnsafeInline => Cow::Borrowed("'unsafe-inline'"),
            Source::UnsafeEval => Cow::Borrowed("'unsafe-eval'"),
            Source::UnsafeHashes => Cow::Borrowed("'unsafe-hashes'"),
            Source::StrictDynamic => Cow::Borrowed("'strict-dynamic'"),
            Source::ReportSample => Cow::Borrowed("'report-sample'"),
            Source::WasmUnsafeEval => Cow::Borrowed("'wasm-unsafe-eval'"),
            Source::Wildcard => Cow::Borrowed("*"),
            Source::Nonce(value) => Cow::Owned(format!("'nonce-{}'", value)),
            Source::Hash { algorithm, digest } => {
                Cow::Owned(format!("'{}-{}'", algorithm.as_str(), digest))
            }
            Source::Subdomains(domain) => Cow::Owned(format!("*.{}", domain)),
            Source::Literal(value) => Cow::Borrowed(value.as_str()),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl From<&str> for Source {
    fn from(token: &str) -> Self {
        match token {
            "'self'" => return Source::SelfOrigin,
            "'none'" => return Source::None,
            "'unsafe-inline'" => return Source::UnsafeInline,
            "'unsafe-eval'" => return Source::UnsafeEval,
            "'unsafe-hashes'" => return Source::UnsafeHashes,
            "'strict-dynamic'" => return Source::StrictDynamic,
            "'report-sample'" => return Source::ReportSample,
            "'wasm-unsafe-eval'" => return Source::WasmUnsafeEval,
            "*" => return Source::Wildcard,
            _ => {}
        }

        if let Some(inner) = token
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
        {
            if let Some(value) = inner.strip_prefix("nonce-") {
                if !value.is_empty() {
                    return Source::Nonce(value.to_string());
                }
            }
            if let Some((algorithm, digest)) = HashAlgorithm::from_prefix(inner) {
                if !digest.is_empty() {
                    return Source::Hash {
                        algorithm,
                        digest: digest.to_string(),
                    };
                }
            }
        }

        match token.strip_prefix("*.") {
            Some(domain) if !domain.is_empty() => Source::Subdomains(domain.to_string()),
            _ => Source::Literal(token.to_string()),
        }
    }
}

impl From<String> for Source {
    fn from(token: String) -> Self {
        Source::from(token.as_str())
    }
}

impl From<&String> for Source {
    fn from(token: &String) -> Self {
        Source::from(token.as_str())
    }
}

impl From<&Source> for Source {
    fn from(source: &Source) -> Self {
        source.clone()
    }
}

/// Collects a caller-supplied source list into owned tokens.
pub(crate) fn collect<I>(sources: I) -> Vec<Source>
where
    I: IntoIterator,
    I::Item: Into<Source>,
{
    sources.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_recognised() {
        assert_eq!(Source::from("'self'"), Source::SelfOrigin);
        // Bare `self` is not a keyword and stays as written
        assert_eq!(Source::from("self"), Source::Literal("self".to_string()));
        assert_eq!(Source::from("'none'"), Source::None);
        assert_eq!(Source::from("'unsafe-inline'"), Source::UnsafeInline);
        assert_eq!(Source::from("'strict-dynamic'"), Source::StrictDynamic);
        assert_eq!(Source::from("*"), Source::Wildcard);
    }

    #[test]
    fn nonce_and_hash_are_parsed() {
        assert_eq!(Source::from("'nonce-abc123'"), Source::nonce("abc123"));
        assert_eq!(Source::from("'sha384-xyz'"), Source::sha384("xyz"));
        // An empty nonce is not a nonce
        assert_eq!(
            Source::from("'nonce-'"),
            Source::Literal("'nonce-'".to_string())
        );
    }

    #[test]
    fn subdomain_wildcard_is_parsed() {
        assert_eq!(
            Source::from("*.example.com"),
            Source::subdomains("example.com")
        );
        assert_eq!(Source::from("*."), Source::Literal("*.".to_string()));
    }

    #[test]
    fn token_rendering() {
        assert_eq!(SELF.token(), "'self'");
        assert_eq!(Source::nonce("n0nce").token(), "'nonce-n0nce'");
        assert_eq!(Source::sha256("AbC=").token(), "'sha256-AbC='");
        assert_eq!(
            Source::from("https://cdn.example.com").token(),
            "https://cdn.example.com"
        );
    }

    #[test]
    fn string_tokens_render_verbatim() {
        let tokens = [
            "'self'",
            "'none'",
            "self",
            "*",
            "\"https://a.example\"",
            "https://a.example",
        ];
        for token in tokens {
            assert_eq!(Source::from(token).token(), token);
        }
    }

    #[test]
    fn rendered_tokens_parse_back_to_the_same_variant() {
        let sources = [
            Source::SelfOrigin,
            Source::None,
            Source::UnsafeHashes,
            Source::WasmUnsafeEval,
            Source::nonce("abc"),
            Source::sha512("d1g3st"),
            Source::subdomains("example.org"),
            Source::Literal("data:".to_string()),
        ];
        for source in sources {
            assert_eq!(Source::from(source.to_string()), source);
        }
    }
}
