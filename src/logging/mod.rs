//! Инициализация логирования на базе `tracing-subscriber`.
//!
//! Сам эмиттер пишет события через `tracing` (подписка и уведомление на
//! уровне `trace`, отписка на уровне `debug`); этот модуль лишь
//! устанавливает глобальный subscriber для приложений, которым он нужен.

pub mod config;
mod filters;
mod formatter;

pub use config::{LogFormat, LoggingConfig};
pub use filters::build_filter_from_config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zevents_error::{LoggingError, ZeventsResult};

/// Устанавливает глобальный subscriber по конфигурации.
///
/// Ошибка, если директива некорректна или subscriber уже установлен.
pub fn init_logging(config: LoggingConfig) -> ZeventsResult<()> {
    config.validate()?;

    let env_filter = filters::build_filter_from_config(&config);
    let fmt_layer = formatter::build_formatter(&config);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized {
            reason: e.to_string(),
        })?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        commit = env!("ZEVENTS_GIT_COMMIT"),
        built = env!("ZEVENTS_BUILD_TIME"),
        log_level = %config.level,
        format = ?config.format,
        "Logging system initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{
        io::Write,
        sync::{Arc, Mutex},
    };

    use serial_test::serial;
    use tracing_subscriber::{fmt, prelude::*, registry::Registry, EnvFilter};
    use zevents_error::StatusCode;

    use super::*;
    use crate::{Emitter, EmitterSettings};

    // Мини-буферный writer для тестов
    #[derive(Clone, Default)]
    struct VecMakeWriter(Arc<Mutex<Vec<u8>>>);

    impl<'a> fmt::MakeWriter<'a> for VecMakeWriter {
        type Writer = VecWriterGuard;

        fn make_writer(&'a self) -> Self::Writer {
            VecWriterGuard(self.0.clone())
        }
    }

    struct VecWriterGuard(Arc<Mutex<Vec<u8>>>);

    impl Write for VecWriterGuard {
        fn write(
            &mut self,
            buf: &[u8],
        ) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Тест проверяет, что эмиттер пишет trace/debug-события отписки и
    /// доставки.
    #[test]
    fn test_emitter_emits_tracing_events() {
        let writer = VecMakeWriter::default();
        let subscriber = Registry::default()
            .with(EnvFilter::new("trace"))
            .with(fmt::layer().with_writer(writer.clone()).with_ansi(false));

        tracing::subscriber::with_default(subscriber, || {
            let settings = EmitterSettings {
                trace_dispatch: true,
                ..Default::default()
            };
            let emitter = Emitter::with_settings(settings).unwrap();
            let ctx = crate::ContextId::next();
            emitter
                .subscribe("log.test", ctx, |_| {})
                .notify("log.test")
                .unsubscribe("log", &ctx);
        });

        let out = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("subscribed"), "got: {out}");
        assert!(out.contains("delivering"), "got: {out}");
        assert!(out.contains("unsubscribed"), "got: {out}");
    }

    /// Тест проверяет, что некорректная директива отклоняется до установки
    /// subscriber'а.
    #[test]
    fn test_init_logging_rejects_bad_directive() {
        let cfg = LoggingConfig {
            level: "zevents=loud".to_string(),
            ..Default::default()
        };
        let err = init_logging(cfg).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::ConfigInvalid);
    }

    /// Тест проверяет, что повторная инициализация возвращает ошибку.
    #[test]
    #[serial]
    fn test_init_logging_twice_fails() {
        std::env::remove_var("RUST_LOG");
        let _ = init_logging(LoggingConfig::default());
        let err = init_logging(LoggingConfig::default()).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::LoggingInitFailed);
    }
}
