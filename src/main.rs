use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttlbench::cli::Cli;
use ttlbench::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ttlbench=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();
    let config = Config::from_env();

    let mut stdout = std::io::stdout();
    if let Err(e) = ttlbench::execute(&config, args.exp, &mut stdout).await {
        tracing::error!(error = %e, "benchmark failed");
        std::process::exit(1);
    }
}
