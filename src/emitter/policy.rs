use std::num::NonZeroU64;

use serde::Serialize;

/// Режим доставки подписки, выводимый из пары (limit, throttle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum DeliveryMode {
    /// Каждое срабатывание.
    Unconstrained,
    /// Срабатывания с номером `1..=limit`.
    Limited { limit: u64 },
    /// Срабатывания 1, 1 + t, 1 + 2t, ...
    Throttled { throttle: u64 },
    /// Доставка, если выполнено хотя бы одно из условий.
    LimitedOrThrottled { limit: u64, throttle: u64 },
}

impl DeliveryMode {
    pub fn from_parts(
        limit: Option<NonZeroU64>,
        throttle: Option<NonZeroU64>,
    ) -> Self {
        match (limit, throttle) {
            (None, None) => Self::Unconstrained,
            (Some(l), None) => Self::Limited { limit: l.get() },
            (None, Some(t)) => Self::Throttled { throttle: t.get() },
            (Some(l), Some(t)) => Self::LimitedOrThrottled {
                limit: l.get(),
                throttle: t.get(),
            },
        }
    }
}

/// Решает, доставлять ли срабатывание номер `firing` (начиная с 1).
///
/// Условия limit и throttle объединяются через ИЛИ.
pub fn should_deliver(
    firing: u64,
    limit: Option<NonZeroU64>,
    throttle: Option<NonZeroU64>,
) -> bool {
    if limit.is_none() && throttle.is_none() {
        return true;
    }
    let within_limit = limit.is_some_and(|l| firing <= l.get());
    let on_beat = throttle.is_some_and(|t| firing == 1 || (firing - 1) % t.get() == 0);
    within_limit || on_beat
}

/// Переводит целочисленный аргумент API в ограничение: неположительные
/// значения означают отсутствие ограничения.
pub(crate) fn positive(value: i64) -> Option<NonZeroU64> {
    u64::try_from(value).ok().and_then(NonZeroU64::new)
}
