//! Tower middleware applying a [`Secure`] aggregator to every response.

use std::sync::Arc;
use std::task::{Context, Poll};

use ::http::header::{HeaderName, HeaderValue};
use ::http::{Request, Response};
use futures::future::BoxFuture;
use tower::{Layer, Service};

use super::header_map::to_http_header;
use crate::error::Error;
use crate::secure::Secure;

/// Tower layer that sets the aggregator's headers on every response.
///
/// Header names and values are validated once, when the layer is built, so
/// the per-response cost is a map insert per header. Headers already on the
/// inner service's response are overwritten.
///
/// # Examples
///
/// ```
/// use secure_headers::{Preset, Secure, SecureLayer};
///
/// let layer = SecureLayer::new(&Secure::from_preset(Preset::Strict)).unwrap();
/// assert_eq!(layer.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct SecureLayer {
    headers: Arc<Vec<(HeaderName, HeaderValue)>>,
}

impl SecureLayer {
    /// Precomputes the headers of `secure`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeaderName`] or [`Error::InvalidHeaderValue`]
    /// if a header cannot be represented by the `http` crate.
    pub fn new(secure: &Secure) -> Result<Self, Error> {
        let headers = secure
            .headers()
            .iter()
            .map(|(name, value)| to_http_header(name, value))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = headers.len(), "security header layer ready");
        Ok(Self {
            headers: Arc::new(headers),
        })
    }

    /// Number of headers set on each response.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` if the layer sets no header.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl TryFrom<&Secure> for SecureLayer {
    type Error = Error;

    fn try_from(secure: &Secure) -> Result<Self, Self::Error> {
        Self::new(secure)
    }
}

impl<S> Layer<S> for SecureLayer {
    type Service = SecureService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SecureService {
            inner,
            headers: self.headers.clone(),
        }
    }
}

/// Service produced by [`SecureLayer`].
#[derive(Debug, Clone)]
pub struct SecureService<S> {
    inner: S,
    headers: Arc<Vec<(HeaderName, HeaderValue)>>,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for SecureService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: 'static,
    ResBody: Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let headers = self.headers.clone();
        let fut = self.inner.call(req);

        Box::pin(async move {
            let mut response = fut.await?;
            let target = response.headers_mut();
            for (name, value) in headers.iter() {
                target.insert(name.clone(), value.clone());
            }
            tracing::trace!(count = headers.len(), "security headers set");
            Ok(response)
        })
    }
}
