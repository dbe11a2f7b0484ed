#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::Response;
use http_body_util::BodyExt;
use rand::Rng;
use serde_json::Value;
use std::fs::File;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use storefront_relay::application::relay::RelayService;
use storefront_relay::config::RelayMode;
use storefront_relay::domain::ports::CheckoutUpstream;
use storefront_relay::error::{Result, StorefrontError};
use storefront_relay::infrastructure::in_memory::InMemoryCatalog;
use storefront_relay::interfaces::http::{AppState, router};
use storefront_relay::interfaces::load_products;
use tokio::net::TcpListener;

pub const FIXTURE_JSON: &str = "tests/fixtures/products.json";
pub const FIXTURE_CSV: &str = "tests/fixtures/products.csv";

/// Writes a catalog CSV with `rows` products at random prices.
pub fn generate_catalog_csv(path: &Path, rows: usize) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    let mut rng = rand::thread_rng();

    wtr.write_record(["id", "name", "price", "image", "description", "category"])?;

    for i in 1..=rows {
        let cents: u32 = rng.gen_range(1..=50_000);
        wtr.write_record([
            i.to_string(),
            format!("Product {i}"),
            format!("{}.{:02}", cents / 100, cents % 100),
            String::new(),
            String::new(),
            "generated".to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Stand-in for the automation webhook that records what it was sent.
#[derive(Clone, Default)]
pub struct StubUpstream {
    reply: Option<Value>,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Value>>>,
}

impl StubUpstream {
    pub fn replying(reply: Value) -> Self {
        Self {
            reply: Some(reply),
            ..Self::default()
        }
    }

    /// An upstream whose every call fails.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl CheckoutUpstream for StubUpstream {
    async fn forward(&self, payload: &Value) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(payload.clone());
        self.reply.clone().ok_or_else(|| {
            StorefrontError::IoError(std::io::Error::other(
                "upstream exploded: secret-token-1234",
            ))
        })
    }
}

pub fn fixture_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(load_products(Path::new(FIXTURE_JSON)).unwrap()).unwrap()
}

/// Router over the fixture catalog relaying to `upstream`.
pub fn storefront(upstream: StubUpstream, mode: RelayMode) -> Router {
    let relay = RelayService::new(Box::new(upstream), mode);
    router(AppState::new(Arc::new(fixture_catalog()), relay))
}

/// Serves `app` on an ephemeral local port.
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn order_intent_body() -> Value {
    serde_json::json!({
        "product": "Logo Tee",
        "size": "M",
        "pickup": "SF",
        "price": 40,
        "stripe_price": 4000
    })
}
