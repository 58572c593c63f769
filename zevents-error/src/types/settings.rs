use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки настроек эмиттера.
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    /// Разделитель сегментов не подходит для имён событий.
    #[error("invalid event separator {separator:?}: must be a non-whitespace, non-alphanumeric char")]
    InvalidSeparator { separator: char },
    /// Значение ключа не удалось разобрать.
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
    /// Не удалось прочитать источник конфигурации.
    #[error("failed to load settings: {reason}")]
    Load { reason: String },
}

impl ErrorExt for SettingsError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidSeparator { .. } | Self::InvalidValue { .. } => StatusCode::ConfigInvalid,
            Self::Load { .. } => StatusCode::ConfigLoadFailed,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
