use rustc_hash::FxHashMap;

use super::{
    subscription::{Handler, Subscription},
    topic::is_self_or_descendant,
};

type EventKey = Box<str>;

/// Реестр подписок: имя события → упорядоченный список подписок.
///
/// Ключи создаются лениво при первой подписке и никогда не удаляются, даже
/// когда список становится пустым. Порядок подписок в списке задаёт порядок
/// доставки.
pub struct Registry<C> {
    events: FxHashMap<EventKey, Vec<Subscription<C>>>,
}

impl<C: Eq> Registry<C> {
    pub fn new() -> Self {
        Self {
            events: FxHashMap::default(),
        }
    }

    /// Регистрирует обработчик для пары (событие, контекст).
    ///
    /// Если подписка для пары уже есть, обработчик дописывается в её конец;
    /// иначе в конец списка события добавляется новая подписка. Возвращает
    /// подписку пары.
    pub fn register(
        &mut self,
        event: &str,
        context: C,
        handler: Handler<C>,
    ) -> &mut Subscription<C> {
        let subs = self.events.entry(event.into()).or_default();

        match subs.iter().position(|s| *s.context() == context) {
            Some(idx) => {
                let sub = &mut subs[idx];
                sub.push_handler(handler);
                sub
            }
            None => {
                subs.push(Subscription::new(context, handler));
                let last = subs.len() - 1;
                &mut subs[last]
            }
        }
    }

    /// Подписка пары (событие, контекст), если есть.
    pub fn find(
        &self,
        event: &str,
        context: &C,
    ) -> Option<&Subscription<C>> {
        self.events
            .get(event)?
            .iter()
            .find(|s| s.context() == context)
    }

    /// Удаляет подписки `context` с события `event` и всех его потомков.
    ///
    /// Предки и посторонние события не затрагиваются. Возвращает число
    /// удалённых подписок.
    pub fn remove_context(
        &mut self,
        event: &str,
        context: &C,
        separator: char,
    ) -> usize {
        let mut removed = 0;
        for (name, subs) in self.events.iter_mut() {
            if !is_self_or_descendant(name, event, separator) {
                continue;
            }
            let before = subs.len();
            subs.retain(|s| s.context() != context);
            removed += before - subs.len();
        }
        removed
    }

    /// Подписки точного имени события (пустой срез, если их нет).
    pub fn subscriptions(
        &self,
        event: &str,
    ) -> &[Subscription<C>] {
        self.events.get(event).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Все зарегистрированные имена, включая опустевшие, по алфавиту.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.events.keys().map(|k| k.to_string()).collect();
        names.sort_unstable();
        names
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn subscription_total(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn handler_total(&self) -> usize {
        self.events
            .values()
            .flat_map(|subs| subs.iter())
            .map(Subscription::handler_count)
            .sum()
    }
}

impl<C: Eq> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}
