//! Framework integration surface.
//!
//! The aggregator never talks to a web framework directly. It writes each
//! header through [`SetHeader`] (or [`SetHeaderAsync`] when the framework's
//! header mutation is awaited), so supporting a new framework means
//! implementing one method for its response type.
//!
//! Bundled implementations:
//! - `HashMap<String, String>`, `BTreeMap<String, String>`,
//!   `Vec<(String, String)>` and [`SecureHeaders`](crate::SecureHeaders)
//! - [`RecordingResponse`], an in-memory target that logs every write
//! - `http::HeaderMap` and `http::Response<B>` (feature `http`)
//! - [`SecureLayer`], a tower middleware (feature `tower`)
//!
//! # Implementing an adapter
//!
//! ```
//! use secure_headers::{Secure, SetHeader};
//!
//! struct LegacyResponse {
//!     lines: Vec<String>,
//! }
//!
//! impl SetHeader for LegacyResponse {
//!     type Error = std::convert::Infallible;
//!
//!     fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
//!         self.lines.retain(|line| !line.starts_with(&format!("{name}:")));
//!         self.lines.push(format!("{name}: {value}"));
//!         Ok(())
//!     }
//! }
//!
//! let mut response = LegacyResponse { lines: Vec::new() };
//! Secure::default().set_headers(&mut response).unwrap();
//! assert!(response.lines.contains(&"X-Content-Type-Options: nosniff".to_string()));
//! ```

use std::future::Future;

mod collections;
#[cfg(feature = "http")]
mod header_map;
#[cfg(feature = "tower")]
mod layer;
mod recording;

#[cfg(feature = "tower")]
pub use layer::{SecureLayer, SecureService};
pub use recording::RecordingResponse;

/// A response whose headers can be set synchronously.
///
/// `set_header` must overwrite any existing value for `name` rather than
/// append a second field, so applying the same headers twice is idempotent.
pub trait SetHeader {
    /// Error returned when the response rejects a header.
    type Error;

    /// Sets `name` to `value`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the response cannot represent the header.
    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;
}

/// A response whose header mutation is itself asynchronous.
///
/// Same contract as [`SetHeader`]: each call overwrites, and the aggregator
/// awaits one call before starting the next.
pub trait SetHeaderAsync {
    /// Error returned when the response rejects a header.
    type Error;

    /// Sets `name` to `value`, replacing any existing value.
    fn set_header_async(
        &mut self,
        name: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

impl<T: SetHeader + ?Sized> SetHeader for &mut T {
    type Error = T::Error;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set_header(name, value)
    }
}
