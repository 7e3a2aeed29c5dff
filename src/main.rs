use anyhow::Result;
use minipress::config;
use minipress::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    match config.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(env_filter).init(),
    }

    config.print_summary();

    server::run(config).await
}
