use rustc_hash::FxHashMap;

/// Таблица счётчиков срабатываний по точному имени события.
///
/// Счётчик каждого имени независим, начинается с нуля и только растёт.
/// Записи никогда не удаляются.
#[derive(Debug, Default)]
pub struct FiringCounters {
    counts: FxHashMap<Box<str>, u64>,
}

impl FiringCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Увеличивает счётчик `event` и возвращает новое значение.
    pub fn advance(
        &mut self,
        event: &str,
    ) -> u64 {
        if let Some(count) = self.counts.get_mut(event) {
            *count = count.saturating_add(1);
            return *count;
        }
        self.counts.insert(event.into(), 1);
        1
    }

    /// Текущее значение счётчика (0, если событие ни разу не срабатывало).
    pub fn get(
        &self,
        event: &str,
    ) -> u64 {
        self.counts.get(event).copied().unwrap_or(0)
    }

    /// Сумма всех счётчиков; насыщается на `u64::MAX`, как и `advance`.
    pub fn total(&self) -> u64 {
        self.counts.values().copied().fold(0, u64::saturating_add)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_ref(), *v))
    }
}
