use std::io::Write;

use anyhow::Context;
use delve_config::DelveConfig;
use delve_db::service::GameService;

use crate::cli::Commands;
use crate::menu::Menu;

/// Dispatch a parsed subcommand.
pub async fn dispatch(
    command: Commands,
    service: &GameService,
    config: &DelveConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Play => play(service, config).await,
        Commands::Seed => seed(service, &mut std::io::stdout().lock()).await,
        Commands::Unseed => unseed(service, &mut std::io::stdout().lock()).await,
    }
}

async fn play(service: &GameService, config: &DelveConfig) -> anyhow::Result<()> {
    if config.database.seed_on_startup {
        ensure_seeded(service).await?;
    }
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(service, stdin.lock(), stdout.lock()).show().await
}

/// Seed unless the seed rooms are already there. Returns whether rows were written.
pub async fn ensure_seeded(service: &GameService) -> anyhow::Result<bool> {
    if service.is_seeded().await? {
        tracing::debug!("seed data already present");
        return Ok(false);
    }
    service
        .seed_initial_data()
        .await
        .context("failed to seed initial data")?;
    Ok(true)
}

pub async fn seed(service: &GameService, out: &mut impl Write) -> anyhow::Result<()> {
    if ensure_seeded(service).await? {
        writeln!(out, "Seed data applied.")?;
    } else {
        writeln!(out, "Seed data already present.")?;
    }
    Ok(())
}

pub async fn unseed(service: &GameService, out: &mut impl Write) -> anyhow::Result<()> {
    service
        .remove_seed_data()
        .await
        .context("failed to remove seed data")?;
    writeln!(out, "Seed data removed.")?;
    Ok(())
}
