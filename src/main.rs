use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use storefront_relay::application::checkout::CheckoutService;
use storefront_relay::application::selection::Selection;
use storefront_relay::config::{
    DEFAULT_BIND_ADDR, DEFAULT_CATALOG_PATH, DEFAULT_WEBHOOK_URL, RelayMode, ServerConfig,
};
use storefront_relay::domain::order::{CheckoutOutcome, PickupLocation, Size};
use storefront_relay::domain::ports::ProductCatalog;
use storefront_relay::domain::product::ProductId;
use storefront_relay::error::StorefrontError;
use storefront_relay::infrastructure::in_memory::InMemoryCatalog;
use storefront_relay::infrastructure::relay_client::HttpCheckoutRelay;
use storefront_relay::interfaces::csv::product_writer::ProductWriter;
use storefront_relay::interfaces::{http, load_products};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the product catalog and the checkout relay over HTTP
    Serve(ServeArgs),
    /// Print the product catalog as CSV
    Products {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Select a size and pickup location for a product and start checkout
    Checkout(CheckoutArgs),
}

#[derive(Args)]
struct CatalogArgs {
    /// Product dataset (.json or .csv)
    #[arg(long = "catalog", env = "STOREFRONT_CATALOG", default_value = DEFAULT_CATALOG_PATH)]
    path: PathBuf,
}

#[derive(Args)]
struct ServeArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Address to listen on
    #[arg(long, env = "STOREFRONT_BIND", default_value = DEFAULT_BIND_ADDR)]
    bind: SocketAddr,

    /// Webhook that receives relayed order intents
    #[arg(long, env = "STOREFRONT_UPSTREAM_URL", default_value = DEFAULT_WEBHOOK_URL)]
    upstream_url: Url,

    /// Whether to validate bodies before relaying them
    #[arg(long, env = "STOREFRONT_RELAY_MODE", value_enum, default_value_t = RelayMode::Strict)]
    relay_mode: RelayMode,

    /// Upper bound on the upstream call, in seconds. Unbounded when omitted.
    #[arg(long, env = "STOREFRONT_UPSTREAM_TIMEOUT_SECS")]
    upstream_timeout_secs: Option<u64>,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind: args.bind,
            catalog_path: args.catalog.path,
            upstream_url: args.upstream_url,
            relay_mode: args.relay_mode,
            upstream_timeout: args.upstream_timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Args)]
struct CheckoutArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Product to buy
    #[arg(long)]
    product_id: ProductId,

    /// One of S, M, L, XL
    #[arg(long)]
    size: Option<Size>,

    /// One of "Ann Arbor", SF, NYC
    #[arg(long)]
    pickup: Option<PickupLocation>,

    /// Origin of a running storefront
    #[arg(long, env = "STOREFRONT_RELAY_URL", default_value = "http://127.0.0.1:3000")]
    relay_url: Url,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => {
            let config = ServerConfig::from(args);
            http::serve(&config).await.into_diagnostic()?;
        }
        Command::Products { catalog } => {
            let catalog = open_catalog(&catalog)?;
            let stdout = io::stdout();
            let mut writer = ProductWriter::new(stdout.lock());
            writer.write_products(catalog.products()).into_diagnostic()?;
        }
        Command::Checkout(args) => checkout(args).await?,
    }

    Ok(())
}

async fn checkout(args: CheckoutArgs) -> Result<()> {
    let catalog = open_catalog(&args.catalog)?;
    let product = catalog
        .get(args.product_id)
        .ok_or_else(|| StorefrontError::ProductNotFound(args.product_id.to_string()))
        .into_diagnostic()?;

    let mut selection = Selection::new();
    if let Some(size) = args.size {
        selection.select_size(size);
    }
    if let Some(pickup) = args.pickup {
        selection.select_pickup(pickup);
    }

    let relay = HttpCheckoutRelay::new(&args.relay_url).into_diagnostic()?;
    let service = CheckoutService::new(Box::new(relay));

    match service.checkout(product, &selection).await.into_diagnostic()? {
        CheckoutOutcome::Redirect(link) => {
            println!("{link}");
            Ok(())
        }
        CheckoutOutcome::Failure(failure) => Err(miette!("{}", failure.notice())),
    }
}

fn open_catalog(args: &CatalogArgs) -> Result<InMemoryCatalog> {
    let products = load_products(&args.path).into_diagnostic()?;
    InMemoryCatalog::new(products).into_diagnostic()
}

/// Logs go to stderr so stdout stays clean for command output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with_writer(io::stderr)
        .init();
}
