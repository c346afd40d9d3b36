//! Adapters for the `http` crate's header map and response types.

use std::future::{self, Future};

use ::http::header::{HeaderMap, HeaderName, HeaderValue};
use ::http::Response;

use super::{SetHeader, SetHeaderAsync};
use crate::error::Error;

/// Converts a header into `http` types, rejecting names and values that are
/// not valid on the wire.
pub(crate) fn to_http_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), Error> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| Error::InvalidHeaderName(name.to_string()))?;
    let header_value = HeaderValue::from_str(value).map_err(|_| Error::InvalidHeaderValue {
        name: name.to_string(),
    })?;
    Ok((header_name, header_value))
}

impl SetHeader for HeaderMap {
    type Error = Error;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        let (name, value) = to_http_header(name, value)?;
        self.insert(name, value);
        Ok(())
    }
}

impl<B> SetHeader for Response<B> {
    type Error = Error;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.headers_mut().set_header(name, value)
    }
}

impl SetHeaderAsync for HeaderMap {
    type Error = Error;

    fn set_header_async(
        &mut self,
        name: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        future::ready(SetHeader::set_header(self, name, value))
    }
}

impl<B> SetHeaderAsync for Response<B> {
    type Error = Error;

    fn set_header_async(
        &mut self,
        name: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        future::ready(SetHeader::set_header(self, name, value))
    }
}
