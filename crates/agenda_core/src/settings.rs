//! Layered settings: defaults, then `agenda.toml`, then `AGENDA__*` environment variables.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::{clock::DEFAULT_TICK_INTERVAL, error::LoadError};

pub const DEFAULT_SETTINGS_FILE: &str = "agenda.toml";
pub const ENV_PREFIX: &str = "AGENDA";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgendaSettings {
    #[serde(default)]
    pub program_path: Option<PathBuf>,
    #[serde(default)]
    pub locale: Option<String>,
    pub tick_seconds: u64,
    pub base_path: String,
    #[serde(default)]
    pub footer: Option<String>,
}

impl Default for AgendaSettings {
    fn default() -> Self {
        Self {
            program_path: None,
            locale: None,
            tick_seconds: DEFAULT_TICK_INTERVAL.as_secs(),
            base_path: "/".into(),
            footer: None,
        }
    }
}

impl AgendaSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_seconds.max(1))
    }
}

pub fn load_settings() -> Result<AgendaSettings, LoadError> {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE), false, ENV_PREFIX)
}

pub fn load_settings_from(
    file: &Path,
    required: bool,
    env_prefix: &str,
) -> Result<AgendaSettings, LoadError> {
    let defaults = AgendaSettings::default();
    let settings = Config::builder()
        .set_default("tick_seconds", defaults.tick_seconds as i64)?
        .set_default("base_path", defaults.base_path)?
        .add_source(File::from(file).required(required))
        .add_source(
            Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<AgendaSettings>()?;
    Ok(settings)
}
