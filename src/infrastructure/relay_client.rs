use crate::domain::order::OrderIntent;
use crate::domain::ports::CheckoutRelay;
use crate::error::Result;
use crate::interfaces::http::RELAY_PATH;
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

/// Calls a running storefront's checkout relay over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCheckoutRelay {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpCheckoutRelay {
    /// `base_url` is the storefront origin, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: &Url) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: base_url.join(RELAY_PATH)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CheckoutRelay for HttpCheckoutRelay {
    async fn start_checkout(&self, intent: &OrderIntent) -> Result<Value> {
        // Error statuses still carry a JSON body; the caller inspects it for a link.
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(intent)
            .send()
            .await?;
        Ok(response.json::<Value>().await?)
    }
}
