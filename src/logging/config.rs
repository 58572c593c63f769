use serde::{Deserialize, Serialize};
use zevents_error::{LoggingError, ZeventsResult};

use super::filters;

/// Формат вывода логов.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

/// Конфигурация логирования.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Директива фильтра, например `"info"` или `"zevents=trace,warn"`.
    /// Переменная `RUST_LOG` имеет приоритет.
    pub level: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            with_ansi: true,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Директива для `EnvFilter`.
    pub fn build_filter_directive(&self) -> String {
        let level = self.level.trim();
        if level.is_empty() {
            "info".to_string()
        } else {
            level.to_string()
        }
    }

    pub fn validate(&self) -> ZeventsResult<()> {
        let directive = self.build_filter_directive();
        if let Err(reason) = filters::parse_directive(&directive) {
            return Err(LoggingError::InvalidDirective { directive, reason }.into());
        }
        Ok(())
    }
}
