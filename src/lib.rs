//! Fluent builders for HTTP security response headers.
//!
//! This crate computes the values of the common security headers and applies
//! them to a response through a small adapter trait:
//! - **Builders**: one chainable value per header kind (CSP, HSTS,
//!   Permissions-Policy, Referrer-Policy, Cache-Control, ...)
//! - **Aggregator**: [`Secure`] holds an optional builder per role and
//!   produces the ordered header mapping
//! - **Presets**: [`Preset::Strict`] and [`Preset::Basic`] fixed configurations
//! - **Adapters**: [`SetHeader`] / [`SetHeaderAsync`] implemented for plain
//!   maps, `http` types and a tower layer
//!
//! # Core Types
//!
//! - [`Secure`]: the aggregator, built once at startup and shared read-only
//! - [`HeaderPolicy`]: header name plus rendered value, implemented by every builder
//! - [`Source`](source::Source): a CSP source expression or permissions allowlist entry
//! - [`SecureConfig`]: declarative TOML configuration
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use secure_headers::headers::{ContentSecurityPolicy, StrictTransportSecurity};
//! use secure_headers::source::{NONE, SELF};
//! use secure_headers::Secure;
//!
//! let secure = Secure::builder()
//!     .hsts(StrictTransportSecurity::new().include_subdomains())
//!     .csp(
//!         ContentSecurityPolicy::new()
//!             .default_src([SELF])
//!             .object_src([NONE])
//!             .img_src([SELF, "https://cdn.example".into()]),
//!     )
//!     .build();
//!
//! let mut response: HashMap<String, String> = HashMap::new();
//! secure.set_headers(&mut response).unwrap();
//!
//! assert_eq!(
//!     response["Content-Security-Policy"],
//!     "default-src 'self'; object-src 'none'; img-src 'self' https://cdn.example"
//! );
//! assert_eq!(
//!     response["Strict-Transport-Security"],
//!     "max-age=31536000; includeSubDomains"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod error;
pub mod headers;
mod policy;
mod preset;
mod secure;
pub mod source;
pub mod web;

pub use config::{CustomHeaderConfig, HeaderSetting, SecureConfig};
pub use error::Error;
pub use policy::HeaderPolicy;
pub use preset::Preset;
pub use secure::{Role, Secure, SecureBuilder, SecureHeaders};
pub use web::{SetHeader, SetHeaderAsync};

#[cfg(feature = "tower")]
pub use web::{SecureLayer, SecureService};
