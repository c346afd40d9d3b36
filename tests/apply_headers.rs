//! Applying an aggregator to response targets, sync and async.

use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;

use secure_headers::headers::{
    CacheControl, ContentSecurityPolicy, CustomHeader, PermissionsPolicy, ReferrerPolicy,
    XFrameOptions,
};
use secure_headers::source::{self, Source, EMPTY, NONE, SELF};
use secure_headers::web::RecordingResponse;
use secure_headers::{Error, HeaderSetting, Preset, Role, Secure, SetHeader, SetHeaderAsync};

/// Response whose header API is only reachable through an awaited call.
#[derive(Default)]
struct StreamingResponse {
    headers: Vec<(String, String)>,
}

impl SetHeaderAsync for StreamingResponse {
    type Error = Infallible;

    fn set_header_async(
        &mut self,
        name: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        let name = name.to_string();
        let value = value.to_string();
        async move {
            tokio::task::yield_now().await;
            self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
            self.headers.push((name, value));
            Ok(())
        }
    }
}

/// Target that fails on its `n`th write.
struct FailingResponse {
    remaining: usize,
    written: Vec<String>,
}

#[derive(Debug, PartialEq)]
struct WriteFailed(String);

impl SetHeader for FailingResponse {
    type Error = WriteFailed;

    fn set_header(&mut self, name: &str, _value: &str) -> Result<(), Self::Error> {
        if self.remaining == 0 {
            return Err(WriteFailed(name.to_string()));
        }
        self.remaining -= 1;
        self.written.push(name.to_string());
        Ok(())
    }
}

#[test]
fn default_headers_reach_a_hash_map() {
    let mut response: HashMap<String, String> = HashMap::new();
    Secure::default().set_headers(&mut response).unwrap();

    assert_eq!(response.len(), 6);
    assert_eq!(response["Server"], "");
    assert_eq!(response["Strict-Transport-Security"], "max-age=31536000");
    assert_eq!(response["X-Frame-Options"], "SAMEORIGIN");
    assert_eq!(response["X-Content-Type-Options"], "nosniff");
    assert_eq!(response["Referrer-Policy"], "strict-origin-when-cross-origin");
    assert_eq!(response["Cache-Control"], "no-store");
}

#[test]
fn set_headers_is_idempotent() {
    let secure = Secure::from_preset(Preset::Strict);

    let mut response = RecordingResponse::new();
    secure.set_headers(&mut response).unwrap();
    let once = response.headers().clone();

    secure.set_headers(&mut response).unwrap();
    assert_eq!(response.headers(), &once);
    assert_eq!(response.writes().len(), 20);
}

#[test]
fn writes_follow_header_order() {
    let secure = Secure::builder()
        .csp(ContentSecurityPolicy::new().default_src([SELF]))
        .custom(CustomHeader::new("X-Robots-Tag", "noindex"))
        .build();

    let mut response = RecordingResponse::new();
    secure.set_headers(&mut response).unwrap();

    let expected: Vec<String> = secure.headers().names().map(String::from).collect();
    assert_eq!(response.writes(), expected.as_slice());
}

#[test]
fn existing_values_are_overwritten() {
    let mut response: BTreeMap<String, String> = BTreeMap::new();
    response.insert("Server".to_string(), "Apache/2.4".to_string());
    response.insert("Content-Type".to_string(), "text/html".to_string());

    Secure::default().set_headers(&mut response).unwrap();

    assert_eq!(response["Server"], "");
    assert_eq!(response["Content-Type"], "text/html");
}

#[test]
fn adapter_error_stops_remaining_writes() {
    let mut response = FailingResponse {
        remaining: 2,
        written: Vec::new(),
    };

    let err = Secure::default().set_headers(&mut response).unwrap_err();
    assert_eq!(err, WriteFailed("Referrer-Policy".to_string()));
    assert_eq!(response.written, ["Server", "Strict-Transport-Security"]);
}

#[test]
fn rejected_header_surfaces_crate_error() {
    let mut response = RecordingResponse::rejecting("cache-control");
    let err = Secure::default().set_headers(&mut response).unwrap_err();

    assert!(matches!(err, Error::InvalidHeaderValue { ref name } if name == "Cache-Control"));
    assert_eq!(response.writes().len(), 3);
}

#[test]
fn composed_policies_render_through_the_aggregator() {
    let nonce = ContentSecurityPolicy::nonce("r4nd0m");
    let secure = Secure::builder()
        .xfo(XFrameOptions::new().deny())
        .referrer(ReferrerPolicy::new().no_referrer().strict_origin())
        .cache(CacheControl::new().no_cache().max_age(0))
        .csp(
            ContentSecurityPolicy::new()
                .default_src([SELF])
                .script_src([SELF, nonce, Source::subdomains("cdn.example")])
                .img_src(EMPTY)
                .object_src([NONE])
                .upgrade_insecure_requests(),
        )
        .permissions(
            PermissionsPolicy::new()
                .geolocation([source::SELF, "https://maps.example".into()])
                .camera(EMPTY),
        )
        .build();

    let headers = secure.headers();
    assert_eq!(headers.get("X-Frame-Options"), Some("DENY"));
    assert_eq!(headers.get("Referrer-Policy"), Some("strict-origin"));
    assert_eq!(headers.get("Cache-Control"), Some("no-cache, max-age=0"));
    assert_eq!(
        headers.get("Content-Security-Policy"),
        Some("default-src 'self'; script-src 'self' 'nonce-r4nd0m' *.cdn.example; object-src 'none'; upgrade-insecure-requests")
    );
    assert_eq!(
        headers.get("Permissions-Policy"),
        Some("geolocation=('self' https://maps.example), camera=()")
    );
}

#[test]
fn options_table_configures_roles() {
    let secure = Secure::from_options([
        ("server", HeaderSetting::from("edge")),
        ("coop", HeaderSetting::from(true)),
        ("hsts", HeaderSetting::from(false)),
        ("custom", HeaderSetting::from("X-Download-Options: noopen")),
    ])
    .unwrap();

    let headers = secure.headers();
    assert_eq!(headers.get("Server"), Some("edge"));
    assert_eq!(headers.get("Cross-Origin-Opener-Policy"), Some("same-origin"));
    assert_eq!(headers.get("X-Download-Options"), Some("noopen"));
    assert!(!secure.is_present(Role::Hsts));
    assert!(!headers.contains_key("Strict-Transport-Security"));
}

#[test]
fn unknown_option_is_fatal() {
    let err = Secure::from_options([
        ("xfo", HeaderSetting::from("DENY")),
        ("x-xss-protection", HeaderSetting::from("0")),
    ])
    .unwrap_err();

    assert!(matches!(err, Error::UnknownOption(ref key) if key == "x-xss-protection"));
}

#[test]
fn every_role_key_is_accepted() {
    let options = Role::ALL
        .iter()
        .filter(|role| **role != Role::Custom)
        .map(|role| (role.key(), HeaderSetting::from(true)));

    let secure = Secure::from_options(options).unwrap();
    assert_eq!(secure.len(), 10);
}

#[test]
fn toml_config_round_trip_through_adapter() {
    let document = r#"
        preset = "strict"
        referrer = "same-origin"
        permissions = false

        [[custom]]
        name = "X-Robots-Tag"
        value = "noindex, nofollow"
    "#;

    let mut response: Vec<(String, String)> = Vec::new();
    Secure::from_toml(document)
        .unwrap()
        .set_headers(&mut response)
        .unwrap();

    assert_eq!(response.len(), 10);
    assert!(response.contains(&("Referrer-Policy".to_string(), "same-origin".to_string())));
    assert!(response.contains(&("X-Robots-Tag".to_string(), "noindex, nofollow".to_string())));
    assert!(!response.iter().any(|(name, _)| name == "Permissions-Policy"));
}

#[tokio::test]
async fn async_path_matches_sync_path() {
    let secure = Secure::from_preset(Preset::Strict);

    let mut sync_target: Vec<(String, String)> = Vec::new();
    secure.set_headers(&mut sync_target).unwrap();

    let mut async_target = StreamingResponse::default();
    secure.set_headers_async(&mut async_target).await.unwrap();

    assert_eq!(async_target.headers, sync_target);
}

#[tokio::test]
async fn async_path_is_idempotent_and_propagates_errors() {
    let secure = Secure::default();

    let mut response = RecordingResponse::new();
    secure.set_headers_async(&mut response).await.unwrap();
    secure.set_headers_async(&mut response).await.unwrap();
    assert_eq!(response.headers(), &secure.headers());

    let mut rejecting = RecordingResponse::rejecting("Server");
    let err = secure.set_headers_async(&mut rejecting).await.unwrap_err();
    assert!(matches!(err, Error::InvalidHeaderValue { .. }));
    assert!(rejecting.writes().is_empty());
}

#[tokio::test]
async fn shared_aggregator_serves_concurrent_tasks() {
    let secure = Arc::new(Secure::from_preset(Preset::Strict));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let secure = Arc::clone(&secure);
        handles.push(tokio::spawn(async move {
            let mut response: HashMap<String, String> = HashMap::new();
            secure.set_headers_async(&mut response).await.unwrap();
            response
        }));
    }

    for handle in handles {
        let response = handle.await.unwrap();
        assert_eq!(response.len(), 10);
    }
}
