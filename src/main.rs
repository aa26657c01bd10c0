use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use vendx_api::RestApi;
use vendx_store::{InMemoryStore, TenderStore, VendorStore};

/// Vendor recommendation engine for procurement tenders
#[derive(Parser, Debug)]
#[command(name = "vendx")]
#[command(about = "Ranks candidate vendors against tender descriptions", long_about = None)]
struct Args {
    /// Path to a JSON seed file with tenders and vendors
    #[arg(short, long)]
    seed_file: Option<PathBuf>,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting vendx v{}", env!("CARGO_PKG_VERSION"));

    let store = match &args.seed_file {
        Some(path) => {
            let store = InMemoryStore::load(path)?;
            info!(
                "Seed file {:?} loaded: {} tenders, {} vendors",
                path,
                store.tender_count(),
                store.vendor_count()
            );
            Arc::new(store)
        }
        None => {
            info!("No seed file given, starting with an empty store");
            Arc::new(InMemoryStore::new())
        }
    };

    let tenders: Arc<dyn TenderStore> = store.clone();
    let vendors: Arc<dyn VendorStore> = store;

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(tenders, vendors, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
