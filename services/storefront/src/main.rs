use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use common::config::ClientConfig;
use common::session::SessionContext;
use common::storage::FileStore;
use gateway::ApiGateway;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting storefront");

    let config = ClientConfig::from_env();
    let backend = ApiGateway::new(&config)?;
    let store = FileStore::open(&config.session_path)?;
    let session = SessionContext::open(store)?;

    info!("Storefront initialized against {}", config.base_url);

    storefront::repl::run(backend, session).await
}
