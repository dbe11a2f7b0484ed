//! HTTP surface: the checkout relay and read-only catalog endpoints.

pub mod catalog;
pub mod error;
pub mod relay;

use crate::application::relay::RelayService;
use crate::config::ServerConfig;
use crate::domain::ports::ProductCatalogRef;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryCatalog;
use crate::infrastructure::webhook::WebhookUpstream;
use crate::interfaces::load_products;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const RELAY_PATH: &str = "/checkout-relay-endpoint";

/// Shared, immutable request-handling state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: ProductCatalogRef,
    pub relay: Arc<RelayService>,
}

impl AppState {
    pub fn new(catalog: ProductCatalogRef, relay: RelayService) -> Self {
        Self {
            catalog,
            relay: Arc::new(relay),
        }
    }

    /// Loads the catalog and builds the upstream client described by `config`.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let catalog = InMemoryCatalog::new(load_products(&config.catalog_path)?)?;
        info!(
            path = %config.catalog_path.display(),
            products = catalog.len(),
            "Catalog loaded"
        );

        let upstream = WebhookUpstream::new(config.upstream_url.clone(), config.upstream_timeout)?;
        let relay = RelayService::new(Box::new(upstream), config.relay_mode);

        Ok(Self::new(Arc::new(catalog), relay))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            RELAY_PATH,
            post(relay::start_checkout).fallback(relay::method_not_allowed),
        )
        .route("/products", get(catalog::list_products))
        .route("/products/{id}", get(catalog::get_product))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the storefront until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let state = AppState::from_config(config)?;
    let listener = TcpListener::bind(config.bind).await?;
    info!(
        addr = %listener.local_addr()?,
        upstream = %config.upstream_url,
        mode = ?state.relay.mode(),
        "Storefront listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
