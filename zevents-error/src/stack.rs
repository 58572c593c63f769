use std::{fmt, panic::Location, sync::Arc};

use crate::{ErrorExt, StatusCode};

/// Ошибка с исходной причиной и контекстами, добавленными по пути наверх.
#[derive(Clone)]
pub struct StackError {
    inner: Arc<dyn ErrorExt>,
    contexts: Vec<ErrorContext>,
}

/// Один уровень контекста и место, где он добавлен.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub message: String,
    pub location: &'static Location<'static>,
}

impl StackError {
    pub fn new<E: ErrorExt>(err: E) -> Self {
        Self {
            inner: Arc::new(err),
            contexts: Vec::new(),
        }
    }

    #[track_caller]
    pub fn context(
        mut self,
        message: impl Into<String>,
    ) -> Self {
        self.contexts.push(ErrorContext {
            message: message.into(),
            location: Location::caller(),
        });
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.inner.status_code()
    }

    /// Контексты от самого внутреннего к внешнему.
    pub fn contexts(&self) -> &[ErrorContext] {
        &self.contexts
    }

    pub fn downcast_ref<T: ErrorExt>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let contexts: Vec<String> = self
            .contexts
            .iter()
            .map(|c| format!("{} at {}", c.message, c.location))
            .collect();
        f.debug_struct("StackError")
            .field("status_code", &self.status_code())
            .field("cause", &self.inner.to_string())
            .field("contexts", &contexts)
            .finish()
    }
}

/// Внешний контекст первым: `outer: inner: cause`.
impl fmt::Display for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for ctx in self.contexts.iter().rev() {
            write!(f, "{}: ", ctx.message)?;
        }
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for StackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl<E: ErrorExt> From<E> for StackError {
    fn from(e: E) -> Self {
        StackError::new(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;
    use crate::{LoggingError, SettingsError};

    /// Тест проверяет порядок контекстов и место их добавления.
    #[test]
    fn test_context_chain() {
        let stack = StackError::new(SettingsError::InvalidSeparator { separator: ' ' })
            .context("validate settings")
            .context("build emitter");

        let messages: Vec<&str> = stack.contexts().iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["validate settings", "build emitter"]);
        assert_eq!(stack.contexts()[0].location.file(), file!());
        assert_eq!(stack.status_code(), StatusCode::ConfigInvalid);
    }

    /// Тест проверяет downcast к исходному типу и отказ для чужого типа.
    #[test]
    fn test_downcast() {
        let stack = StackError::from(SettingsError::Load {
            reason: "missing file".to_string(),
        });

        assert!(matches!(
            stack.downcast_ref::<SettingsError>(),
            Some(SettingsError::Load { .. })
        ));
        assert!(stack.downcast_ref::<LoggingError>().is_none());
    }

    /// Тест проверяет `Display` (внешний контекст первым) и `source`.
    #[test]
    fn test_display_and_source() {
        let stack = StackError::new(SettingsError::InvalidSeparator { separator: 'x' })
            .context("validate")
            .context("Emitter::with_settings");

        let display = stack.to_string();
        assert!(display.starts_with("Emitter::with_settings: validate: "));
        assert!(display.contains("'x'"));
        assert!(stack.source().is_some());
    }
}
