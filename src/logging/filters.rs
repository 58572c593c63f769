use tracing_subscriber::EnvFilter;

use crate::logging::config::LoggingConfig;

/// Разбирает директиву фильтра, возвращая текст ошибки при неудаче.
pub(crate) fn parse_directive(directive: &str) -> Result<EnvFilter, String> {
    EnvFilter::try_new(directive).map_err(|e| e.to_string())
}

/// `RUST_LOG`, если задан и корректен; иначе директива из конфигурации;
/// иначе `info`.
pub fn build_filter_from_config(config: &LoggingConfig) -> EnvFilter {
    if let Ok(env_filter) = EnvFilter::try_from_default_env() {
        return env_filter;
    }

    let directive = config.build_filter_directive();
    match parse_directive(&directive) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!(
                "Invalid log filter directive from config ('{directive}'): {e}; falling back to 'info'"
            );
            EnvFilter::new("info")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::*;

    /// Тест проверяет, что без RUST_LOG используется директива из конфига.
    #[test]
    #[serial]
    fn test_filter_from_config_without_env() {
        env::remove_var("RUST_LOG");
        let cfg = LoggingConfig {
            level: "zevents=trace".to_string(),
            ..Default::default()
        };
        let filter = build_filter_from_config(&cfg);
        assert!(filter.to_string().contains("zevents=trace"));
    }

    /// Тест проверяет приоритет RUST_LOG над конфигом.
    #[test]
    #[serial]
    fn test_env_overrides_config() {
        env::set_var("RUST_LOG", "warn");
        let filter = build_filter_from_config(&LoggingConfig::default());
        env::remove_var("RUST_LOG");
        assert!(filter.to_string().contains("warn"));
    }

    /// Тест проверяет откат на `info` при некорректной директиве.
    #[test]
    #[serial]
    fn test_bad_directive_falls_back_to_info() {
        env::remove_var("RUST_LOG");
        let cfg = LoggingConfig {
            level: "zevents=loud".to_string(),
            ..Default::default()
        };
        let filter = build_filter_from_config(&cfg);
        assert!(filter.to_string().contains("info"));
    }
}
