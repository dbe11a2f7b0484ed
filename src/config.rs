use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_CATALOG_PATH: &str = "data/products.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_WEBHOOK_URL: &str = "https://hook.us1.make.com/khkth0r3gis9wznsslctqug864qarnkf";

/// How much the relay checks an inbound body before forwarding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RelayMode {
    /// Reject bodies that are not a well-formed order intent.
    #[default]
    Strict,
    /// Forward any JSON body untouched.
    Passthrough,
}

/// Settings for `storefront serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub catalog_path: PathBuf,
    pub upstream_url: Url,
    pub relay_mode: RelayMode,
    /// `None` leaves the outbound call unbounded.
    pub upstream_timeout: Option<Duration>,
}
