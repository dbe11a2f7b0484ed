//! Adapters behind the domain ports.

pub mod in_memory;
pub mod relay_client;
pub mod webhook;
