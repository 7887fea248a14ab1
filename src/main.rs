use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use herald::config::Config;
use herald::events;
use herald::feed;
use herald::logging::configure_logging;
use herald::watcher::ReleaseWatcher;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may be set directly.
    let _ = dotenvy::dotenv();

    configure_logging();

    let config = Config::from_env()?;
    let http_client = feed::create_http_client()?;

    info!(
        "Watching releases for {}/{}, trigger command: {}",
        config.repo_owner, config.repo_name, config.trigger_command
    );

    let watcher = Arc::new(ReleaseWatcher::new(config, http_client));
    events::events_loop(watcher).await
}
