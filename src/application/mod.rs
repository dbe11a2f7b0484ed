//! Application layer orchestrating the storefront's two flows.
//!
//! `RelayService` is the server half of checkout and forwards order intents to
//! the upstream automation endpoint. `Selection` and `CheckoutService` are the
//! client half: they gate checkout on a complete selection and interpret the
//! relayed reply as a redirect or a failure.

pub mod checkout;
pub mod relay;
pub mod selection;
