use crate::config::RelayMode;
use crate::domain::order::OrderIntent;
use crate::domain::ports::CheckoutUpstreamBox;
use crate::error::{Result, StorefrontError};
use serde_json::Value;
use tracing::{debug, error};

/// Forwards checkout bodies to the upstream automation endpoint.
///
/// Holds no per-request state: every call to [`RelayService::relay`] makes
/// exactly one upstream call, with no caching, dedup or retry.
pub struct RelayService {
    upstream: CheckoutUpstreamBox,
    mode: RelayMode,
}

impl RelayService {
    pub fn new(upstream: CheckoutUpstreamBox, mode: RelayMode) -> Self {
        Self { upstream, mode }
    }

    pub fn mode(&self) -> RelayMode {
        self.mode
    }

    /// Relays `body` upstream and returns the upstream's JSON reply untouched.
    ///
    /// The body is forwarded exactly as received. In strict mode it must also
    /// parse as an [`OrderIntent`], otherwise nothing is sent. Every upstream
    /// failure collapses into [`StorefrontError::UpstreamRelay`].
    pub async fn relay(&self, body: Value) -> Result<Value> {
        if self.mode == RelayMode::Strict {
            let intent = OrderIntent::from_json(&body)?;
            debug!(
                product = %intent.product,
                size = %intent.size,
                pickup = %intent.pickup,
                "Order intent accepted"
            );
        }

        self.upstream.forward(&body).await.map_err(|e| {
            error!(error = %e, "Error calling checkout upstream");
            StorefrontError::UpstreamRelay(e.to_string())
        })
    }
}
