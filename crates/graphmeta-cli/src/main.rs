//! Graphmeta binary - applies the storage schema metadata on startup.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graphmeta_cli::{storage_metadata_plan, Args};
use graphmeta_client::{ClientConfig, MetadataClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graphmeta=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = args.into_config();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        endpoint = %config.endpoint,
        timeout_secs = config.timeout.as_secs(),
        "applying storage metadata"
    );

    let client = MetadataClient::new(
        ClientConfig::new(&config.endpoint, &config.admin_secret).with_timeout(config.timeout),
    )?;

    let plan = storage_metadata_plan();
    let report = plan.apply(&client).await?;

    tracing::info!(
        applied = report.applied,
        already_in_place = report.already_in_place,
        warnings = report.warnings.len(),
        "storage metadata up to date"
    );

    Ok(())
}
