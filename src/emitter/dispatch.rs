use super::{registry::Registry, subscription::Handler};

/// Снимок одной доставки: контекст и копия списка обработчиков на момент
/// начала обработки префикса.
pub(crate) struct Delivery<C> {
    pub(crate) context: C,
    handlers: Vec<Handler<C>>,
}

impl<C> Delivery<C> {
    /// Вызывает обработчики по порядку. Паника обработчика не перехватывается
    /// и прерывает оставшуюся часть доставки.
    pub(crate) fn run(&self) {
        for handler in &self.handlers {
            handler(&self.context);
        }
    }

    pub(crate) fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

/// Строит план доставки для префикса `event`, сработавшего в `firing`-й раз.
///
/// В план попадают только подписки, которым политика разрешает доставку.
/// План не ссылается на реестр, поэтому обработчики могут свободно менять
/// подписки во время его исполнения.
pub(crate) fn plan<C: Clone + Eq>(
    registry: &Registry<C>,
    event: &str,
    firing: u64,
) -> Vec<Delivery<C>> {
    registry
        .subscriptions(event)
        .iter()
        .filter(|sub| sub.accepts(firing))
        .map(|sub| Delivery {
            context: sub.context().clone(),
            handlers: sub.handlers().to_vec(),
        })
        .collect()
}
