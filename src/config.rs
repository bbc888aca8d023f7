use cle::{Money, Result};

use std::{env, path::PathBuf};

use anyhow::Context;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Ceiling used when `CASH_THRESHOLD` is not set, in dinars
const DEFAULT_THRESHOLD: Money = Money::from_dinars(50_000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub threshold: Money,
    pub journal: Option<PathBuf>,
}

/// Installs the logger and reads the settings from the environment.
///
/// `RUST_LOG` sets the log level, `CASH_THRESHOLD` the regulatory ceiling and
/// `CASH_JOURNAL` an optional CSV journal to restore from and append to.
pub fn configure_app() -> Result<Settings> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let threshold = match env::var("CASH_THRESHOLD") {
        Ok(raw) => Money::parse(&raw).with_context(|| format!("Invalid CASH_THRESHOLD: {raw:?}"))?,
        Err(_) => DEFAULT_THRESHOLD,
    };

    if threshold.is_negative() {
        anyhow::bail!("CASH_THRESHOLD must not be negative, got {threshold}");
    }

    let journal = env::var_os("CASH_JOURNAL")
        .filter(|path| !path.is_empty())
        .map(PathBuf::from);

    Ok(Settings { threshold, journal })
}
