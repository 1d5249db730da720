//! Configuration structures.

use backtest_strategies::SmaConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub strategy: StrategySettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub report: ReportSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "backtest".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Strategy selection and parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategySettings {
    /// Registry key
    pub name: String,
    pub short_window: usize,
    pub long_window: usize,
}

impl StrategySettings {
    pub fn sma_config(&self) -> SmaConfig {
        SmaConfig {
            short_window: self.short_window,
            long_window: self.long_window,
        }
    }

    /// Parameters in the form the strategy registry accepts.
    pub fn params(&self) -> serde_json::Value {
        serde_json::json!({
            "short_window": self.short_window,
            "long_window": self.long_window,
        })
    }
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            name: "sma".to_string(),
            short_window: 3,
            long_window: 5,
        }
    }
}

/// Input data settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/sample_data.csv"),
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// `text`, `json` or `csv`
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save: Option<PathBuf>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            save: None,
        }
    }
}
