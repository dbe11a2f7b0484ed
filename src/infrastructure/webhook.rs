use crate::domain::ports::CheckoutUpstream;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Outbound client for the checkout automation webhook.
///
/// Posts the payload as JSON and decodes the reply as JSON whatever the
/// response status. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WebhookUpstream {
    client: reqwest::Client,
    url: Url,
}

impl WebhookUpstream {
    /// Creates a client for `url`. Without a `timeout` the call waits as long
    /// as the network stack lets it.
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url,
        })
    }
}

#[async_trait]
impl CheckoutUpstream for WebhookUpstream {
    async fn forward(&self, payload: &Value) -> Result<Value> {
        debug!(url = %self.url, "Forwarding checkout request upstream");
        let response = self
            .client
            .post(self.url.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Checkout upstream answered with a non-success status");
        }

        Ok(response.json::<Value>().await?)
    }
}
