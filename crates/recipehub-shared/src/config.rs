//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::constants::{APP_NAME, DEFAULT_POLL_MS, DEFAULT_TICK_MS};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub ui: UiSettings,
    pub timer: TimerSettings,
    pub data: DataSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiSettings {
    /// How long the event loop waits for terminal input before draining app events.
    pub poll_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TimerSettings {
    pub tick_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub seed_mock_recipes: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    pub dir: String,
}

impl AppConfig {
    /// Layered load: defaults, `config/default`, an optional explicit file,
    /// then `RECIPEHUB__SECTION__KEY` environment variables.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let mut builder = Config::builder()
            .set_default("app.name", APP_NAME)?
            .set_default("ui.poll_ms", DEFAULT_POLL_MS)?
            .set_default("timer.tick_ms", DEFAULT_TICK_MS)?
            .set_default("data.seed_mock_recipes", true)?
            .set_default("log.level", "info")?
            .set_default("log.format", "pretty")?
            .set_default("log.dir", "logs")?
            .add_source(File::with_name("config/default").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("RECIPEHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: AppConfig = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.timer.tick_ms == 0 {
            return Err(AppError::InvalidConfig(
                "timer.tick_ms must be greater than 0".into(),
            ));
        }
        if self.ui.poll_ms == 0 {
            return Err(AppError::InvalidConfig(
                "ui.poll_ms must be greater than 0".into(),
            ));
        }
        match self.log.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(AppError::InvalidConfig(format!(
                "log.format must be 'pretty' or 'json', got '{}'",
                other
            ))),
        }
    }
}
