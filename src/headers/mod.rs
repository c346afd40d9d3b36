//! Header policy builders, one per header kind.
//!
//! Every builder is a consuming, chainable value: each directive method takes
//! `self` and returns it, so a policy is written as one expression and then
//! handed to the [`Secure`](crate::Secure) aggregator, which only reads it.
//!
//! Calling a directive method twice keeps the last call. Source-list
//! directives do not merge across calls; the second call's list replaces the
//! first one.

/// Shared implementation for headers that hold exactly one token.
///
/// The target type must have a `value: Cow<'static, str>` field and a
/// `new()` constructor returning the default.
macro_rules! single_value_header {
    ($ty:ident, $name:literal) => {
        impl $ty {
            /// Replaces the value with an arbitrary string.
            pub fn set(mut self, value: impl Into<String>) -> Self {
                self.value = ::std::borrow::Cow::Owned(value.into());
                self
            }

            /// Restores the default value.
            pub fn clear(self) -> Self {
                Self::new()
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::policy::HeaderPolicy for $ty {
            fn header_name(&self) -> &str {
                $name
            }

            fn header_value(&self) -> String {
                self.value.to_string()
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.value)
            }
        }
    };
}

mod cache_control;
mod clear_site_data;
mod content_security_policy;
mod content_type_options;
mod cross_origin;
mod custom;
mod directives;
mod frame_options;
mod permissions_policy;
mod referrer_policy;
mod report_to;
mod server;
mod strict_transport_security;
mod xss_protection;

pub use cache_control::CacheControl;
pub use clear_site_data::ClearSiteData;
pub use content_security_policy::ContentSecurityPolicy;
pub use content_type_options::XContentTypeOptions;
pub use cross_origin::{CrossOriginEmbedderPolicy, CrossOriginOpenerPolicy};
pub use custom::CustomHeader;
pub use frame_options::XFrameOptions;
pub use permissions_policy::PermissionsPolicy;
pub use referrer_policy::ReferrerPolicy;
pub use report_to::{ReportEndpoint, ReportTo};
pub use server::Server;
pub use strict_transport_security::{StrictTransportSecurity, ONE_YEAR, TWO_YEARS};
pub use xss_protection::XXSSProtection;
