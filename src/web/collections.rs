//! Adapters for plain in-memory header collections.

use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::future::{self, Future};

use super::{SetHeader, SetHeaderAsync};
use crate::secure::SecureHeaders;

impl SetHeader for HashMap<String, String> {
    type Error = Infallible;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

impl SetHeader for BTreeMap<String, String> {
    type Error = Infallible;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// Header names compare case-insensitively; the first matching field is
/// replaced in place.
impl SetHeader for Vec<(String, String)> {
    type Error = Infallible;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        match self
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }
}

impl SetHeader for SecureHeaders {
    type Error = Infallible;

    fn set_header(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.insert(name, value);
        Ok(())
    }
}

macro_rules! ready_async {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SetHeaderAsync for $ty {
                type Error = Infallible;

                fn set_header_async(
                    &mut self,
                    name: &str,
                    value: &str,
                ) -> impl Future<Output = Result<(), Self::Error>> + Send {
                    future::ready(SetHeader::set_header(self, name, value))
                }
            }
        )*
    };
}

ready_async!(
    HashMap<String, String>,
    BTreeMap<String, String>,
    Vec<(String, String)>,
    SecureHeaders,
);
