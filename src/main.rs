//! ARBSCAN — console controller for a remote crypto arbitrage scanner
//!
//! Entry point. Loads configuration, initialises structured logging,
//! loads the exchange catalog, and runs the interactive command loop
//! with graceful shutdown.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use arbscan::config;
use arbscan::controller::catalog::ExchangeCatalog;
use arbscan::controller::inputs::{InputSource, ScanInputs};
use arbscan::controller::notifier::ErrorNotifier;
use arbscan::controller::orchestrator::ScanOrchestrator;
use arbscan::service::http::HttpScanService;
use arbscan::service::ScanService;
use arbscan::view::console::ConsoleView;
use arbscan::view::ScanView;

const BANNER: &str = r#"
    _    ____  ____ ____   ____    _    _   _
   / \  |  _ \| __ ) ___| / ___|  / \  | \ | |
  / _ \ | |_) |  _ \___ \| |     / _ \ |  \| |
 / ___ \|  _ <| |_) |__) | |___ / ___ \| |\  |
/_/   \_\_| \_\____/____/ \____/_/   \_\_| \_|

  Arbitrage Scan Console
  v0.1.0
"#;

const HELP: &str = "\
Commands:
  exchanges      list selectable exchanges
  use <id>       select the exchange to scan
  profit <pct>   set the minimum profit input (blank/garbage -> 0.1)
  scan           run one scan now
  auto           toggle the 10s auto-scan
  help           this text
  quit           exit";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    // Load configuration from TOML
    let cfg = config::AppConfig::load("config.toml")?;

    // Initialise structured logging
    init_logging(&cfg);

    // Print startup banner
    println!("{BANNER}");
    info!(
        service_url = %cfg.service.base_url,
        auto_scan_interval_secs = cfg.scanner.auto_scan_interval_secs,
        "ARBSCAN starting up"
    );

    // -- Initialise components -------------------------------------------

    let service: Arc<dyn ScanService> = Arc::new(HttpScanService::new(
        &cfg.service.base_url,
        Duration::from_secs(cfg.service.timeout_secs),
    )?);
    let view: Arc<dyn ScanView> = Arc::new(ConsoleView::new());

    let notifier = Arc::new(ErrorNotifier::with_ttl(
        Arc::clone(&view),
        Duration::from_secs(cfg.scanner.error_display_secs),
    ));
    let catalog = Arc::new(ExchangeCatalog::new(
        Arc::clone(&service),
        Arc::clone(&view),
    ));
    let inputs = Arc::new(ScanInputs::new());
    let orchestrator = Arc::new(ScanOrchestrator::with_interval(
        Arc::clone(&service),
        Arc::clone(&view),
        Arc::clone(&catalog),
        Arc::clone(&notifier),
        inputs.clone() as Arc<dyn InputSource>,
        Duration::from_secs(cfg.scanner.auto_scan_interval_secs),
    ));

    // Liveness probe — informational only, the catalog load is the
    // real gate for enabling scan triggers.
    match service.health().await {
        Ok(()) => info!("Scan service is reachable"),
        Err(e) => warn!(error = %e, "Scan service health check failed"),
    }

    if let Err(e) = catalog.load().await {
        notifier.show(&format!("Failed to load exchanges: {e}"));
    }

    // -- Command loop ----------------------------------------------------

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!("Entering command loop. Press Ctrl+C or type `quit` to stop.");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if !handle_command(line.trim(), &orchestrator, &catalog, &inputs).await {
                            break;
                        }
                    }
                    None => break, // stdin closed
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received.");
                break;
            }
        }
    }

    if orchestrator.is_auto_scan_active() {
        orchestrator.toggle_auto_scan();
    }
    info!("ARBSCAN shut down cleanly.");

    Ok(())
}

/// Dispatch one console command. Returns false to exit the loop.
async fn handle_command(
    line: &str,
    orchestrator: &Arc<ScanOrchestrator>,
    catalog: &Arc<ExchangeCatalog>,
    inputs: &Arc<ScanInputs>,
) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "exchanges" => {
            if catalog.is_ready() {
                for exchange in catalog.selectable() {
                    println!("  {exchange}");
                }
            } else {
                println!("Exchange catalog not loaded.");
            }
        }
        "use" => match rest.parse::<u32>() {
            Ok(id) if catalog.is_selectable(id) => {
                inputs.select_exchange(id);
                println!("Selected exchange {id}.");
            }
            _ => println!("Unknown or disabled exchange: {rest}"),
        },
        "profit" => {
            inputs.set_min_profit(rest);
            println!("Min profit input set to {rest:?}.");
        }
        "scan" => {
            let (selection, min_profit) = inputs.current();
            orchestrator.trigger_scan(selection, &min_profit).await;
        }
        "auto" => {
            orchestrator.toggle_auto_scan();
        }
        "help" => println!("{HELP}"),
        "quit" | "exit" => return false,
        other => println!("Unknown command: {other}. Type `help`."),
    }

    true
}

/// Initialise the `tracing` subscriber.
fn init_logging(cfg: &config::AppConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("arbscan=info"));

    if cfg.log.json {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}
