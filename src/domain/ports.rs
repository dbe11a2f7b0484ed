use super::order::OrderIntent;
use super::product::{Product, ProductId};
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Read-only view of the product catalog.
pub trait ProductCatalog: Send + Sync {
    fn get(&self, id: ProductId) -> Option<&Product>;
    fn products(&self) -> &[Product];
}

/// The external automation endpoint that receives relayed order intents.
#[async_trait]
pub trait CheckoutUpstream: Send + Sync {
    async fn forward(&self, payload: &Value) -> Result<Value>;
}

/// The storefront's own relay endpoint, as seen from a checkout client.
#[async_trait]
pub trait CheckoutRelay: Send + Sync {
    async fn start_checkout(&self, intent: &OrderIntent) -> Result<Value>;
}

pub type ProductCatalogRef = Arc<dyn ProductCatalog>;
pub type CheckoutUpstreamBox = Box<dyn CheckoutUpstream>;
pub type CheckoutRelayBox = Box<dyn CheckoutRelay>;
