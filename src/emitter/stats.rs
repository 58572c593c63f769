use std::collections::BTreeMap;

use serde::Serialize;

/// Снимок состояния эмиттера для отладки и логирования.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmitterStats {
    /// Зарегистрированные имена событий (включая опустевшие).
    pub events: usize,
    pub subscriptions: usize,
    pub handlers: usize,
    /// Сумма всех счётчиков срабатываний.
    pub total_firings: u64,
    /// Счётчик срабатываний по каждому имени.
    pub firings: BTreeMap<String, u64>,
}

impl EmitterStats {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
