use std::time::Duration;

use anyhow::{bail, Context};
use log::LevelFilter;
use patcher_core::NotificationTimings;
use patcher_engine::{BackendSettings, POLL_INTERVAL};

use super::logging::LogDestination;

const LOG_FLAG: &str = "--log";
const USAGE: &str = "usage: patcher_app [--log terminal|file|both] [BACKEND_URL]";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendSettings,
    pub poll_interval: Duration,
    pub notifications: NotificationTimings,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendSettings::default(),
            poll_interval: POLL_INTERVAL,
            notifications: NotificationTimings::default(),
            log_destination: LogDestination::default(),
            log_level: patcher_logging::default_level(),
        }
    }
}

impl AppConfig {
    /// Accepts `[--log terminal|file|both] [BACKEND_URL]`.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut base_url = None;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == LOG_FLAG {
                let Some(value) = args.next() else {
                    bail!("{LOG_FLAG} needs a value; {USAGE}");
                };
                config.log_destination = value.parse().map_err(anyhow::Error::msg)?;
            } else if base_url.is_none() {
                base_url = Some(arg);
            } else {
                bail!("unexpected argument {arg:?}; {USAGE}");
            }
        }

        if let Some(base_url) = base_url {
            config.backend.base_url = base_url;
            config
                .backend
                .base()
                .with_context(|| format!("backend url {:?}", config.backend.base_url))?;
        }
        Ok(config)
    }
}
