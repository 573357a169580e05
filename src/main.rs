use anyhow::Result;
use clap::Parser;
use clip_archive::archive::ArchiveStore;
use clip_archive::cli::Cli;
use clip_archive::clipboard::SystemClipboard;
use clip_archive::commands;
use clip_archive::config::Config;
use clip_archive::logging;
use clip_archive::utils::paths::resolve_store_path;
use std::io;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    logging::init(&config.log_level);

    let store_path = resolve_store_path(cli.store.as_deref(), &config)?;
    debug!(path = %store_path.display(), "Using archive file");

    let mut store = ArchiveStore::load(&store_path)?;
    let mut clipboard = SystemClipboard::new(config.clipboard_settle())?;

    commands::run(&cli, &mut store, &mut clipboard, &mut io::stdout().lock())?;

    Ok(())
}
