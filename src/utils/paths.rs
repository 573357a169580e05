use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::archive::STORE_FILE_NAME;
use crate::config::Config;

pub fn get_clip_archive_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".clip-archive"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let dir = get_clip_archive_dir()?;
    Ok(dir.join("config.toml"))
}

/// Default archive location: a fixed file name next to the running executable.
pub fn get_default_store_path() -> Result<PathBuf> {
    let exe = env::current_exe().context("Could not locate the running executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    let dir = exe
        .parent()
        .ok_or_else(|| anyhow!("Executable has no parent directory: {}", exe.display()))?;
    Ok(dir.join(STORE_FILE_NAME))
}

/// Pick the archive file: command line first, then config, then the default.
pub fn resolve_store_path(cli_override: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = cli_override {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = &config.store_path {
        return Ok(path.clone());
    }
    get_default_store_path()
}
