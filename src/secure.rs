//! The aggregator composing header builders into one response's header set.
//!
//! This module provides:
//! - `Secure`: optional builder per role, header computation, apply-to-response
//! - `SecureBuilder`: chained construction starting from the default subset
//! - `SecureHeaders`: the ordered `name -> value` mapping it produces
//! - `Role`: the option keys addressing each slot

mod aggregator;
mod builder;
mod headers;
mod role;

pub use aggregator::Secure;
pub use builder::SecureBuilder;
pub use headers::SecureHeaders;
pub use role::Role;
