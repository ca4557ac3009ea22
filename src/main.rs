use brewrec_api::RestApi;
use brewrec_core::{load_catalog, DEFAULT_PAIRING_COLUMN};
use brewrec_engine::{Recommender, UpsellPolicy};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A beverage recommendation service
#[derive(Parser, Debug)]
#[command(name = "brewrec")]
#[command(about = "Similarity, upsell, and food-pairing recommendations for a beverage catalog", long_about = None)]
struct Args {
    /// Path to the directory holding drinks.json, food.json, and pairing.json
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Name of the pairing table's classification column
    #[arg(long, default_value = DEFAULT_PAIRING_COLUMN)]
    pairing_column: String,

    /// Require upsell candidates to match the target's temperature style too
    #[arg(long)]
    strict_upsell: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
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

    info!("Starting brewrec v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);
    info!("Pairing column: {}", args.pairing_column);

    // Any data-integrity failure aborts here; no partial catalog is served
    let catalog = Arc::new(load_catalog(&args.data_dir, &args.pairing_column)?);
    info!(
        "Catalog loaded: {} drinks, {} foods, {} pairing rules",
        catalog.drink_count(),
        catalog.foods().len(),
        catalog.rules().len()
    );

    let policy = if args.strict_upsell {
        UpsellPolicy::MatchMilkAndTemperature
    } else {
        UpsellPolicy::MatchMilk
    };
    let engine = Arc::new(Recommender::build(catalog, policy)?);
    info!("Similarity matrix built for {} drinks", engine.matrix().len());

    info!("HTTP API: http://localhost:{}/recommend", args.port);
    RestApi::start(engine, args.port).await?;

    info!("Shutting down...");
    Ok(())
}
