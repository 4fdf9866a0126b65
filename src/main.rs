use clap::Parser;
use scout::backend::{HttpBackend, ScraperBackend};
use scout::core::config::{self, ScoutConfig};
use scout::core::state::App;
use scout::{oneshot, tui};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "scout", about = "Trigger the event scraper backend from your terminal")]
struct Args {
    /// Backend base URL (overrides SCOUT_SERVER_URL and the config file)
    #[arg(short, long)]
    server: Option<String>,

    /// City to preselect; sent as-is
    #[arg(short, long)]
    city: Option<String>,

    /// Fire one request, print the result, and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to scout.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("scout.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        ScoutConfig::default()
    });
    let resolved = config::resolve(&file_config, args.server.as_deref(), args.city.as_deref());

    log::info!(
        "Scout starting up (server={}, city={})",
        resolved.server_url,
        resolved.default_city
    );

    let backend: Arc<dyn ScraperBackend> = Arc::new(HttpBackend::new(resolved.server_url.clone()));
    let app = App::from_config(&resolved);

    if args.once {
        if !oneshot::run(app, backend).await {
            std::process::exit(1);
        }
        return Ok(());
    }

    tui::run(app, backend)
}
