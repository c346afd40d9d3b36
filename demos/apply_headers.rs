//! Header application demonstration.
//!
//! This demo shows the three ways to configure an aggregator:
//! 1. Start from a preset and adjust individual roles
//! 2. Compose builders with `Secure::builder()`
//! 3. Load a TOML configuration
//!
//! Run with: `cargo run --example apply_headers`

use std::collections::HashMap;

use secure_headers::headers::{ContentSecurityPolicy, CustomHeader, PermissionsPolicy};
use secure_headers::source::{self, Source, EMPTY};
use secure_headers::{Preset, Secure};

const CONFIG: &str = r#"
preset = "basic"
xfo = "DENY"
csp = "default-src 'self'; frame-ancestors 'none'"

[[custom]]
name = "X-Robots-Tag"
value = "noindex"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Strict preset, COEP relaxed ===");
    let mut strict = Secure::from_preset(Preset::Strict);
    strict.coep = None;
    println!("{}\n", strict);

    println!("=== Composed builders ===");
    let nonce = ContentSecurityPolicy::nonce("2726c7f26c");
    let composed = Secure::builder()
        .csp(
            ContentSecurityPolicy::new()
                .default_src([source::SELF])
                .script_src([source::SELF, source::STRICT_DYNAMIC, nonce])
                .img_src([source::SELF, Source::subdomains("images.example")])
                .upgrade_insecure_requests(),
        )
        .permissions(PermissionsPolicy::new().camera(EMPTY).fullscreen([source::SELF]))
        .custom(CustomHeader::new("X-Download-Options", "noopen"))
        .build();

    let mut response: HashMap<String, String> = HashMap::new();
    composed.set_headers(&mut response)?;
    let mut names: Vec<_> = response.keys().collect();
    names.sort();
    for name in names {
        println!("{}: {}", name, response[name]);
    }
    println!();

    println!("=== From TOML ===");
    let configured = Secure::from_toml(CONFIG)?;
    println!("{}", configured);

    Ok(())
}
