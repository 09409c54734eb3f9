// IPL auction explorer entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load the auction and stats tables
// 4. Run the TUI until the user quits

use ipl_explorer_core::config;
use ipl_explorer_core::dataset::loader;
use ipl_explorer_tui::app::Session;
use ipl_explorer_tui::tui;

use anyhow::Context;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("IPL explorer starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: auction={}, stats={}, export dir={}",
        config.data_paths.auction, config.data_paths.stats, config.export.dir
    );

    let dataset = loader::load_all(&config).context("failed to load auction data")?;
    info!(
        "Loaded {} auction rows, {} stats rows",
        dataset.auction.len(),
        dataset.stats.records.len()
    );

    let session = Session::new(config, dataset);
    if let Err(e) = tui::run(session).await {
        error!("TUI error: {:#}", e);
        return Err(e);
    }

    info!("IPL explorer shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (the terminal belongs to the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("ipl-explorer.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ipl_explorer=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
