use tracing_subscriber::EnvFilter;
use upcheck::commands::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Silent unless RUST_LOG asks for output. Console messages go through
    // the msg macros, which switch to tracing in debug mode.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    Cli::menu().await
}
