use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use atelier_seed::{seed_clients, ClientGenerator, SeedConfig, DEFAULT_COUNT};

#[derive(Debug, Parser)]
#[command(
    name = "atelier-seed",
    about = "Insert a batch of synthetic billing clients for one user",
    version
)]
struct Cli {
    /// Owner of the generated clients.
    #[arg(long, env = "SEED_USER_ID")]
    user_id: Uuid,

    /// Number of clients to generate.
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// RNG seed, for a reproducible batch.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atelier_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // --- Configuration ---
    let config = match SeedConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Seed configuration is incomplete");
            std::process::exit(1);
        }
    };
    let options = match config.connect_options() {
        Ok(options) => options,
        Err(err) => {
            tracing::error!(error = %err, "Seed configuration is invalid");
            std::process::exit(1);
        }
    };

    // --- Database ---
    let pool = atelier_db::connect_lazy_with(options, config.max_connections);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    tracing::info!(user_id = %cli.user_id, count = cli.count, "Seeding clients");
    seed_clients(
        &pool,
        &ClientGenerator::default(),
        &mut rng,
        cli.user_id,
        cli.count,
    )
    .await;

    pool.close().await;
}
