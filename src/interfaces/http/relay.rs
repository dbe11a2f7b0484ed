use super::AppState;
use crate::error::StorefrontError;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::Method;
use serde_json::Value;
use tracing::info;

/// `POST /checkout-relay-endpoint`
pub async fn start_checkout(
    State(state): State<AppState>,
    method: Method,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, StorefrontError> {
    info!(%method, "Checkout relay request");
    let Json(body) =
        payload.map_err(|rejection| StorefrontError::InvalidBody(rejection.body_text()))?;

    let reply = state.relay.relay(body).await?;
    Ok(Json(reply))
}

/// Any other method on the relay path.
pub async fn method_not_allowed(method: Method) -> StorefrontError {
    info!(%method, "Checkout relay request");
    StorefrontError::MethodNotAllowed
}
