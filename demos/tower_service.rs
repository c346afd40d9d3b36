//! Tower middleware demonstration.
//!
//! Wraps a plain `service_fn` handler in `SecureLayer` and prints the
//! response headers it produces.
//!
//! Run with: `cargo run --example tower_service`

use std::convert::Infallible;

use http::{Request, Response};
use secure_headers::{Preset, Secure, SecureLayer};
use tower::{service_fn, Layer, ServiceExt};

async fn hello(_req: Request<()>) -> Result<Response<&'static str>, Infallible> {
    Ok(Response::new("hello"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let layer = SecureLayer::new(&Secure::from_preset(Preset::Strict))?;
    let service = layer.layer(service_fn(hello));

    let response = service.oneshot(Request::new(())).await?;
    for (name, value) in response.headers() {
        println!("{}: {}", name, value.to_str()?);
    }

    Ok(())
}
