use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки инициализации логирования.
#[derive(Debug, Clone, Error)]
pub enum LoggingError {
    /// Некорректная директива фильтра.
    #[error("invalid log filter directive '{directive}': {reason}")]
    InvalidDirective { directive: String, reason: String },
    /// Глобальный subscriber уже установлен.
    #[error("global tracing subscriber already installed: {reason}")]
    AlreadyInitialized { reason: String },
}

impl ErrorExt for LoggingError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidDirective { .. } => StatusCode::ConfigInvalid,
            Self::AlreadyInitialized { .. } => StatusCode::LoggingInitFailed,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
