/// A header builder that renders to a single `name: value` pair.
///
/// Every builder in [`headers`](crate::headers) implements this trait. The
/// aggregator only ever reads builders through it, so rendering must be a
/// pure function of the builder's current state: two builders that received
/// the same sequence of calls produce byte-identical values.
///
/// # Examples
///
/// ```
/// use secure_headers::HeaderPolicy;
/// use secure_headers::headers::StrictTransportSecurity;
///
/// let hsts = StrictTransportSecurity::new().max_age(31536000).preload();
/// assert_eq!(hsts.header_name(), "Strict-Transport-Security");
/// assert_eq!(hsts.header_value(), "max-age=31536000; preload");
/// ```
pub trait HeaderPolicy {
    /// Returns the header name, e.g. `Content-Security-Policy`.
    fn header_name(&self) -> &str;

    /// Serializes the current directive state into the header value.
    fn header_value(&self) -> String;
}

impl<T: HeaderPolicy + ?Sized> HeaderPolicy for &T {
    fn header_name(&self) -> &str {
        (**self).header_name()
    }

    fn header_value(&self) -> String {
        (**self).header_value()
    }
}

impl<T: HeaderPolicy + ?Sized> HeaderPolicy for Box<T> {
    fn header_name(&self) -> &str {
        (**self).header_name()
    }

    fn header_value(&self) -> String {
        (**self).header_value()
    }
}
