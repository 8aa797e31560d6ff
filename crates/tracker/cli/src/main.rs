//! Round tracker driver.
//!
//! Reads initiative feed events from stdin, one JSON object per line, and
//! prints the roster after each one.
//!
//! ```bash
//! echo '{"type":"snapshot","entries":[{"id":1,"name":"Orc","kind":"creature"}]}' \
//!     | cargo run -p tracker-cli
//! ```
mod app;
mod config;
mod logging;

use anyhow::Result;
use app::TrackerApp;
use config::CliConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!(
        default_effect_rounds = config.tracker.default_effect_rounds,
        "Starting round tracker"
    );

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    TrackerApp::new(config).run(stdin, tokio::io::stdout()).await
}
