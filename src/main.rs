//! Order client CLI.
//!
//! Loads configuration, fetches one order from the order service and prints
//! it. Error responses from the service are reported with the server's own
//! error text.

use std::path::PathBuf;

use clap::Parser;

use order_client::config::loader::service_url_source;
use order_client::config::load_config_or_default;
use order_client::observability::logging::init_logging;
use order_client::OrderServiceClient;

#[derive(Parser)]
#[command(name = "order-client")]
#[command(about = "Fetch an order from the order service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the order service base URL.
    #[arg(short, long)]
    url: Option<String>,

    /// Order to fetch.
    #[arg(default_value = "123")]
    order_id: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config_or_default(cli.config.as_deref())?;
    let url_source = service_url_source(cli.url.is_some(), |key| std::env::var(key).ok());
    if let Some(url) = cli.url {
        config.order_service.url = url;
        if let Err(errors) = order_client::config::validate_config(&config) {
            return Err(order_client::config::ConfigError::Validation(errors).into());
        }
    }

    init_logging(&config.observability)?;

    tracing::info!(
        order_service = %config.order_service.url,
        order_service_source = url_source,
        connect_timeout_secs = config.timeouts.connect_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let client = OrderServiceClient::from_config(&config)?;

    match client.get_order_info(&cli.order_id).await {
        Ok(Some(order)) => {
            println!("{}", serde_json::to_string_pretty(&order)?);
            Ok(())
        }
        Ok(None) => {
            println!("no order body");
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                order_id = %cli.order_id,
                kind = e.kind().as_str(),
                status = ?e.status(),
                error = %e,
                "Order lookup failed"
            );
            Err(e.into())
        }
    }
}
