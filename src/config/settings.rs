use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use zevents_error::{ensure, ResultExt, SettingsError, StackError, ZeventsResult};

use crate::emitter::DEFAULT_SEPARATOR;

/// Настройки эмиттера.
///
/// Источники в порядке приоритета: переменные окружения `ZEVENTS_*`,
/// TOML-файл (если указан), значения по умолчанию.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterSettings {
    /// Разделитель сегментов имени события.
    pub separator: char,
    /// Писать `trace!` на каждую доставку.
    pub trace_dispatch: bool,
}

impl Default for EmitterSettings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            trace_dispatch: false,
        }
    }
}

impl EmitterSettings {
    /// Значения по умолчанию + переменные окружения.
    pub fn load() -> ZeventsResult<Self> {
        Self::build(None)
    }

    /// Значения по умолчанию + TOML-файл + переменные окружения.
    pub fn from_file(path: impl AsRef<Path>) -> ZeventsResult<Self> {
        let path = path.as_ref();
        Self::build(Some(path)).with_context(|| format!("settings file {}", path.display()))
    }

    /// Разделитель должен быть одним непробельным и не буквенно-цифровым
    /// символом.
    pub fn validate(&self) -> ZeventsResult<()> {
        let sep = self.separator;
        ensure!(
            !sep.is_whitespace() && !sep.is_alphanumeric(),
            SettingsError::InvalidSeparator { separator: sep }
        );
        Ok(())
    }

    fn build(file: Option<&Path>) -> ZeventsResult<Self> {
        let mut builder = Config::builder()
            .set_default("separator", DEFAULT_SEPARATOR.to_string())
            .map_err(load_error)?
            .set_default("trace_dispatch", false)
            .map_err(load_error)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let settings: Self = builder
            .add_source(Environment::with_prefix("ZEVENTS"))
            .build()
            .map_err(load_error)?
            .try_deserialize()
            .map_err(|e| {
                StackError::from(SettingsError::InvalidValue {
                    key: "settings".to_string(),
                    reason: e.to_string(),
                })
            })?;

        settings.validate()?;
        tracing::debug!(
            separator = %settings.separator,
            trace_dispatch = settings.trace_dispatch,
            "emitter settings loaded"
        );
        Ok(settings)
    }
}

fn load_error(err: ConfigError) -> StackError {
    SettingsError::Load {
        reason: err.to_string(),
    }
    .into()
}
