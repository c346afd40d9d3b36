use thiserror::Error;

/// Errors raised while configuring a [`Secure`](crate::Secure) aggregator or
/// writing its headers through one of the bundled adapters.
///
/// Header builders themselves never fail. Every variant here is either a
/// construction-time misconfiguration or a header the target response type
/// cannot represent.
#[derive(Debug, Error)]
pub enum Error {
    /// A preset name that is neither `strict` nor `basic`.
    #[error("unknown preset '{0}' (expected 'strict' or 'basic')")]
    UnknownPreset(String),

    /// An option key that does not name an aggregator role.
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// A custom header option that is not of the form `Name: value`.
    #[error("invalid custom header '{0}' (expected 'Name: value')")]
    InvalidCustomHeader(String),

    /// A blank string for an option whose header must not be empty.
    #[error("empty value for option '{0}' (use false to omit the header)")]
    EmptyValue(String),

    /// A configuration document that failed to parse or contained unknown keys.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A header name the target response type rejects.
    #[error("invalid header name '{0}'")]
    InvalidHeaderName(String),

    /// A header value the target response type rejects (e.g. contains a newline).
    #[error("invalid value for header '{name}'")]
    InvalidHeaderValue {
        /// Name of the header whose value was rejected
        name: String,
    },
}
