//! In-memory response that records every header write.

use std::future::{self, Future};

use super::{SetHeader, SetHeaderAsync};
use crate::error::Error;
use crate::secure::SecureHeaders;

/// An in-memory response that records every header write.
///
/// Useful for asserting on what an aggregator would send without a web
/// framework: the current headers, the write order, and how a rejected
/// header stops the remaining writes.
///
/// # Examples
///
/// ```
/// use secure_headers::{Secure, web::RecordingResponse};
///
/// let mut response = RecordingResponse::new();
/// Secure::default().set_headers(&mut response).unwrap();
///
/// assert_eq!(response.headers().get("X-Frame-Options"), Some("SAMEORIGIN"));
/// assert_eq!(response.writes().len(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingResponse {
    headers: SecureHeaders,
    writes: Vec<String>,
    reject: Option<String>,
}

impl RecordingResponse {
    /// Creates an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a response that refuses to set `name` (case-insensitive).
    pub fn rejecting(name: impl Into<String>) -> Self {
        Self {
            reject: Some(name.into()),
            ..Self::default()
        }
    }

    /// Current header values.
    pub fn headers(&self) -> &SecureHeaders {
        &self.headers
    }

    /// Names of every accepted write, in call order.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// Clears the write log, keeping the current headers.
    pub fn reset_writes(&mut self) {
        self.writes.clear();
    }
}

impl SetHeader for RecordingResponse {
    type Error = Error;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        if let Some(rejected) = &self.reject {
            if rejected.eq_ignore_ascii_case(name) {
                return Err(Error::InvalidHeaderValue {
                    name: name.to_string(),
                });
            }
        }
        self.headers.insert(name, value);
        self.writes.push(name.to_string());
        Ok(())
    }
}

impl SetHeaderAsync for RecordingResponse {
    type Error = Error;

    fn set_header_async(
        &mut self,
        name: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        future::ready(SetHeader::set_header(self, name, value))
    }
}
