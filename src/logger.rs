use anyhow::{Context, Result};
use log::LevelFilter;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

use crate::config::LoggingConfig;
use crate::constants::LOG_FILE_NAME;

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global logger from configuration.
///
/// Safe to call more than once; only the first call installs a dispatcher.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled || INIT.get().is_some() {
        return Ok(());
    }

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(parse_level(&config.level)?)
        .chain(std::io::stderr());

    if config.file {
        let path = log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("Failed to install logger")?;
    let _ = INIT.set(());
    Ok(())
}

fn parse_level(level: &str) -> Result<LevelFilter> {
    match level {
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => anyhow::bail!("unknown log level '{other}'"),
    }
}

fn log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("menulist").join(LOG_FILE_NAME))
}
