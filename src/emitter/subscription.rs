use std::{fmt, num::NonZeroU64, rc::Rc};

use super::policy::{should_deliver, DeliveryMode};

/// Обработчик события. Контекст подписки передаётся явно при каждом вызове.
pub type Handler<C> = Rc<dyn Fn(&C)>;

/// Подписка: связь пары (событие, контекст) с её обработчиками.
///
/// На одну пару приходится не более одной подписки; повторная регистрация
/// дописывает обработчик в конец `handlers`.
pub struct Subscription<C> {
    context: C,
    handlers: Vec<Handler<C>>,
    limit: Option<NonZeroU64>,
    throttle: Option<NonZeroU64>,
}

impl<C> Subscription<C> {
    pub(crate) fn new(
        context: C,
        handler: Handler<C>,
    ) -> Self {
        Self {
            context,
            handlers: vec![handler],
            limit: None,
            throttle: None,
        }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn mode(&self) -> DeliveryMode {
        DeliveryMode::from_parts(self.limit, self.throttle)
    }

    /// Подлежит ли срабатывание номер `firing` доставке этой подписке.
    pub fn accepts(
        &self,
        firing: u64,
    ) -> bool {
        should_deliver(firing, self.limit, self.throttle)
    }

    pub(crate) fn push_handler(
        &mut self,
        handler: Handler<C>,
    ) {
        self.handlers.push(handler);
    }

    pub(crate) fn set_limit(
        &mut self,
        limit: NonZeroU64,
    ) {
        self.limit = Some(limit);
    }

    pub(crate) fn set_throttle(
        &mut self,
        throttle: NonZeroU64,
    ) {
        self.throttle = Some(throttle);
    }

    pub(crate) fn handlers(&self) -> &[Handler<C>] {
        &self.handlers
    }
}

impl<C: fmt::Debug> fmt::Debug for Subscription<C> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("context", &self.context)
            .field("handlers", &self.handlers.len())
            .field("limit", &self.limit)
            .field("throttle", &self.throttle)
            .finish()
    }
}
