use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod logging;
mod menu;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("delve error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    let config = bootstrap::load_config(&flags)?;
    logging::init_tracing(&config.logging, &flags)?;

    let target = config
        .database
        .target()
        .context("database is not configured")?;
    let service = delve_db::service::GameService::connect(&target)
        .await
        .context("failed to open the delve database")?;

    commands::dispatch(cli.command.unwrap_or_default(), &service, &config).await
}
