//! Property tests for builder rendering and aggregator application.
//!
//! These validate invariants that must hold for any directive values:
//! last call wins, rendering is deterministic across builds, and applying headers twice
//! leaves the same response as applying them once.

use proptest::prelude::*;
use secure_headers::headers::{
    CacheControl, ContentSecurityPolicy, CustomHeader, PermissionsPolicy,
    StrictTransportSecurity,
};
use secure_headers::web::RecordingResponse;
use secure_headers::{HeaderPolicy, Secure};

// Strategy: host-like source tokens
fn arb_host() -> impl Strategy<Value = String> {
    prop::string::string_regex("https://[a-z]{1,12}\\.example").unwrap()
}

fn arb_sources() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_host(), 0..5)
}

// Strategy: custom header name/value pairs
fn arb_custom() -> impl Strategy<Value = (String, String)> {
    (
        prop::string::string_regex("X-[A-Z][a-z]{1,10}").unwrap(),
        prop::string::string_regex("[a-z0-9=,; ]{0,20}").unwrap(),
    )
}

fn build_secure(sources: &[String], custom: &[(String, String)]) -> Secure {
    let mut builder = Secure::builder()
        .csp(ContentSecurityPolicy::new().default_src(["'self'"]).img_src(sources))
        .permissions(PermissionsPolicy::new().geolocation(sources));
    for (name, value) in custom {
        builder = builder.custom(CustomHeader::new(name.as_str(), value.as_str()));
    }
    builder.build()
}

proptest! {
    /// Property: a second call to a source directive replaces the first list
    #[test]
    fn proptest_csp_last_call_wins(first in arb_sources(), second in arb_sources()) {
        let twice = ContentSecurityPolicy::new()
            .script_src(&first)
            .script_src(&second);
        let once = ContentSecurityPolicy::new().script_src(&second);

        prop_assert_eq!(twice.header_value(), once.header_value());
    }

    /// Property: HSTS directive order does not depend on call order
    #[test]
    fn proptest_hsts_fixed_order(
        max_age in 0u64..=63_072_000,
        subdomains_first in any::<bool>(),
    ) {
        let a = if subdomains_first {
            StrictTransportSecurity::new().include_subdomains().preload().max_age(max_age)
        } else {
            StrictTransportSecurity::new().preload().max_age(max_age).include_subdomains()
        };

        prop_assert_eq!(
            a.header_value(),
            format!("max-age={}; includeSubDomains; preload", max_age)
        );
    }

    /// Property: cache value directives keep only the last seconds value
    #[test]
    fn proptest_cache_max_age_last_call_wins(first in any::<u64>(), second in any::<u64>()) {
        let cache = CacheControl::new().max_age(first).no_cache().max_age(second);
        prop_assert_eq!(cache.header_value(), format!("max-age={}, no-cache", second));
    }

    /// Property: permissions allowlist tokens render as written, in order
    #[test]
    fn proptest_permissions_tokens_verbatim(
        origins in arb_sources(),
        quote in any::<bool>(),
    ) {
        let tokens: Vec<String> = origins
            .iter()
            .map(|o| if quote { format!("\"{}\"", o) } else { o.clone() })
            .collect();
        let policy = PermissionsPolicy::new().payment(&tokens);

        prop_assert_eq!(policy.header_value(), format!("payment=({})", tokens.join(" ")));
    }

    /// Property: two builds from the same calls render identical headers
    #[test]
    fn proptest_headers_deterministic(
        sources in arb_sources(),
        custom in prop::collection::vec(arb_custom(), 0..4),
    ) {
        let first = build_secure(&sources, &custom);
        let second = build_secure(&sources, &custom);

        prop_assert_eq!(first.headers(), second.headers());
        prop_assert_eq!(first.to_string(), second.to_string());
        prop_assert_eq!(first.headers(), first.headers());
    }

    /// Property: applying headers twice equals applying them once
    #[test]
    fn proptest_set_headers_idempotent(
        custom in prop::collection::vec(arb_custom(), 0..4),
        preexisting in prop::collection::vec(arb_custom(), 0..4),
    ) {
        let mut builder = Secure::builder();
        for (name, value) in &custom {
            builder = builder.custom(CustomHeader::new(name.as_str(), value.as_str()));
        }
        let secure = builder.build();

        let mut response = RecordingResponse::new();
        for (name, value) in &preexisting {
            secure_headers::SetHeader::set_header(&mut response, name, value).unwrap();
        }

        secure.set_headers(&mut response).unwrap();
        let once = response.headers().clone();
        secure.set_headers(&mut response).unwrap();

        prop_assert_eq!(response.headers(), &once);
        for (name, value) in secure.headers().iter() {
            prop_assert_eq!(response.headers().get(name), Some(value));
        }
    }
}
