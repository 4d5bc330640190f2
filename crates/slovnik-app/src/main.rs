use std::sync::Arc;

use clap::Parser;
use slovnik_config::Config;
use slovnik_store::Store;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// Personal-dictionary companion: captures selected text, translates it and
/// keeps the word/translation pairs in a durable dictionary.
#[derive(Parser)]
#[command(name = "slovnik", version)]
struct Args {
    /// Storage file path (overrides SLOVNIK_STORAGE)
    #[arg(long)]
    storage: Option<String>,

    /// Source language code (overrides SOURCE_LANG)
    #[arg(long)]
    source_lang: Option<String>,

    /// Target language code (overrides TARGET_LANG)
    #[arg(long)]
    target_lang: Option<String>,

    /// Command bus URL (overrides WS_URL)
    #[arg(long)]
    ws_url: Option<String>,

    /// Disable the translation gateway and use the simulated processor
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let mut config = Config::new();

    if let Some(storage) = args.storage {
        config.storage.path = storage;
    }
    if let Some(from) = args.source_lang {
        config.translator.from_lang = from;
    }
    if let Some(to) = args.target_lang {
        config.translator.to_lang = to;
    }
    if let Some(ws_url) = args.ws_url {
        config.ws_url = ws_url;
    }
    if args.offline {
        config.translator.enabled = false;
    }

    let store = Arc::new(Store::open(&config.storage.path).await?);
    let state = Arc::new(AppState::new(config));

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(store);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if atty::is(atty::Stream::Stdout) {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    }
}
