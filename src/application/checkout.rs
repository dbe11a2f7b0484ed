use super::selection::Selection;
use crate::domain::order::{CheckoutFailure, CheckoutOutcome};
use crate::domain::ports::CheckoutRelayBox;
use crate::domain::product::Product;
use crate::error::Result;
use tracing::{debug, info, warn};

/// Client side of checkout: turns a complete selection into one relay call
/// and interprets the reply.
pub struct CheckoutService {
    relay: CheckoutRelayBox,
}

impl CheckoutService {
    pub fn new(relay: CheckoutRelayBox) -> Self {
        Self { relay }
    }

    /// Starts checkout for `product` with the current `selection`.
    ///
    /// Returns `IncompleteSelection` without contacting the relay unless both a
    /// size and a pickup location are selected.
    pub async fn checkout(
        &self,
        product: &Product,
        selection: &Selection,
    ) -> Result<CheckoutOutcome> {
        let intent = selection.order_intent(product)?;

        let reply = match self.relay.start_checkout(&intent).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Checkout error");
                return Ok(CheckoutOutcome::Failure(CheckoutFailure::RelayUnavailable));
            }
        };
        debug!(reply = %reply, "Relay replied");

        let outcome = CheckoutOutcome::from_relay_response(&reply);
        match &outcome {
            CheckoutOutcome::Redirect(url) => {
                info!(product = %intent.product, link = %url, "Redirecting to checkout")
            }
            CheckoutOutcome::Failure(failure) => {
                warn!(product = %intent.product, ?failure, "No redirect URL")
            }
        }
        Ok(outcome)
    }
}
