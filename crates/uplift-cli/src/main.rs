mod cli;

use clap::Parser;
use cli::opt;
use tracing::level_filters::LevelFilter;
use uplift_utils::tracing::TracingConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = opt::Cli::parse();

    let _guard = uplift_utils::tracing::setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(cli.sentry_dsn.clone())
            .env(cli.env.clone())
            .default_level(if cli.debug { LevelFilter::DEBUG } else { LevelFilter::WARN })
            .build(),
    )?;

    cli::exec(cli.command).await
}
