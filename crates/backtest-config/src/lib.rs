//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, AppSettings, DataSettings, LoggingConfig, ReportSettings, StrategySettings,
};

use config::{Config, ConfigError, Environment, File, FileFormat, Source};
use std::path::Path;

/// Environment variable prefix, e.g. `BACKTEST__STRATEGY__LONG_WINDOW=20`.
pub const ENV_PREFIX: &str = "BACKTEST";

/// Load configuration from file and environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    build(File::from(path).required(true))
}

/// Load configuration from file if it exists, otherwise from defaults.
/// Environment overrides apply in both cases.
pub fn load_config_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    build(File::from(path).required(false))
}

/// Parse configuration from a TOML string, with environment overrides.
pub fn parse_config(toml: &str) -> Result<AppConfig, ConfigError> {
    build(File::from_str(toml, FileFormat::Toml))
}

/// Render a configuration as TOML.
pub fn to_toml(config: &AppConfig) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(config)
}

fn build<S>(file: S) -> Result<AppConfig, ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
