use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use tracing::{debug, trace};
use zevents_error::{ResultExt, ZeventsResult};

use super::{
    context::ContextId,
    counters::FiringCounters,
    dispatch,
    policy::{positive, DeliveryMode},
    registry::Registry,
    stats::EmitterStats,
    subscription::Handler,
    topic,
};
use crate::config::EmitterSettings;

struct EmitterState<C> {
    registry: Registry<C>,
    counters: FiringCounters,
    settings: EmitterSettings,
}

/// Иерархический синхронный эмиттер событий.
///
/// `Emitter` это дешёвый клонируемый дескриптор одного экземпляра: клоны видят
/// общие подписки и счётчики, отдельно созданные эмиттеры независимы.
/// Обработчик, которому нужен доступ к своему эмиттеру, должен захватывать
/// [`WeakEmitter`], иначе образуется цикл `Rc`.
///
/// Уведомление `a.b.c` доставляется подписчикам `a.b.c`, `a.b` и `a` (в этом
/// порядке), отписка от `a.b` снимает подписки с `a.b` и всех его потомков.
///
/// Обработчики вызываются без удержания внутреннего заимствования, так что
/// из них можно подписываться, отписываться и уведомлять. Для каждого
/// префикса список доставок фиксируется в момент начала его обработки.
/// Паника обработчика не перехватывается: она прерывает оставшуюся часть
/// текущего `notify`, эмиттер при этом остаётся работоспособным.
pub struct Emitter<C = ContextId> {
    state: Rc<RefCell<EmitterState<C>>>,
}

/// Слабая ссылка на [`Emitter`].
pub struct WeakEmitter<C = ContextId> {
    state: Weak<RefCell<EmitterState<C>>>,
}

impl<C> Clone for Emitter<C> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<C> Clone for WeakEmitter<C> {
    fn clone(&self) -> Self {
        Self {
            state: Weak::clone(&self.state),
        }
    }
}

impl<C> WeakEmitter<C> {
    pub fn upgrade(&self) -> Option<Emitter<C>> {
        self.state.upgrade().map(|state| Emitter { state })
    }
}

impl<C: Clone + Eq + 'static> Emitter<C> {
    /// Создаёт эмиттер с настройками по умолчанию.
    pub fn new() -> Self {
        Self::from_state(EmitterSettings::default())
    }

    /// Создаёт эмиттер с заданными настройками, предварительно проверив их.
    pub fn with_settings(settings: EmitterSettings) -> ZeventsResult<Self> {
        settings
            .validate()
            .context("Emitter::with_settings")?;
        Ok(Self::from_state(settings))
    }

    fn from_state(settings: EmitterSettings) -> Self {
        Self {
            state: Rc::new(RefCell::new(EmitterState {
                registry: Registry::new(),
                counters: FiringCounters::new(),
                settings,
            })),
        }
    }

    pub fn settings(&self) -> EmitterSettings {
        self.state.borrow().settings.clone()
    }

    pub fn downgrade(&self) -> WeakEmitter<C> {
        WeakEmitter {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Подписывает `handler` на `event` от имени `context`.
    ///
    /// Повторная подписка того же контекста на то же событие дописывает
    /// обработчик к существующей подписке, сохраняя её ограничения.
    pub fn subscribe<F>(
        &self,
        event: &str,
        context: C,
        handler: F,
    ) -> &Self
    where
        F: Fn(&C) + 'static,
    {
        self.register(event, context, Rc::new(handler));
        self
    }

    /// Как [`subscribe`](Self::subscribe), но подписка получит только первые
    /// `times` срабатываний события. При `times <= 0` ограничение не
    /// ставится.
    ///
    /// Лимит ставится на всю подписку пары (событие, контекст), включая
    /// обработчики, добавленные ранее.
    pub fn subscribe_limited<F>(
        &self,
        event: &str,
        context: C,
        handler: F,
        times: i64,
    ) -> &Self
    where
        F: Fn(&C) + 'static,
    {
        let mut state = self.state.borrow_mut();
        let sub = state.registry.register(event, context, Rc::new(handler));
        if let Some(limit) = positive(times) {
            sub.set_limit(limit);
        }
        trace!(event, times, "limited subscription");
        drop(state);
        self
    }

    /// Как [`subscribe`](Self::subscribe), но подписка получит срабатывания
    /// 1, 1 + `frequency`, 1 + 2·`frequency`, ... При `frequency <= 0`
    /// ограничение не ставится.
    pub fn subscribe_throttled<F>(
        &self,
        event: &str,
        context: C,
        handler: F,
        frequency: i64,
    ) -> &Self
    where
        F: Fn(&C) + 'static,
    {
        let mut state = self.state.borrow_mut();
        let sub = state.registry.register(event, context, Rc::new(handler));
        if let Some(throttle) = positive(frequency) {
            sub.set_throttle(throttle);
        }
        trace!(event, frequency, "throttled subscription");
        drop(state);
        self
    }

    /// Снимает подписки `context` с `event` и всех его потомков.
    pub fn unsubscribe(
        &self,
        event: &str,
        context: &C,
    ) -> &Self {
        let mut state = self.state.borrow_mut();
        let separator = state.settings.separator;
        let removed = state.registry.remove_context(event, context, separator);
        drop(state);
        debug!(event, removed, "unsubscribed");
        self
    }

    /// Уведомляет о событии `event` и всех его предках.
    pub fn notify(
        &self,
        event: &str,
    ) -> &Self {
        let (separator, trace_dispatch) = {
            let state = self.state.borrow();
            (state.settings.separator, state.settings.trace_dispatch)
        };

        for prefix in topic::ancestors(event, separator) {
            let (firing, deliveries) = {
                let mut state = self.state.borrow_mut();
                let firing = state.counters.advance(prefix);
                (firing, dispatch::plan(&state.registry, prefix, firing))
            };

            for delivery in &deliveries {
                if trace_dispatch {
                    trace!(
                        event,
                        prefix,
                        firing,
                        handlers = delivery.handler_count(),
                        "delivering"
                    );
                }
                delivery.run();
            }
        }
        self
    }

    fn register(
        &self,
        event: &str,
        context: C,
        handler: Handler<C>,
    ) {
        let mut state = self.state.borrow_mut();
        let handlers = state.registry.register(event, context, handler).handler_count();
        drop(state);
        trace!(event, handlers, "subscribed");
    }

    /// Сколько раз срабатывало точное имя `event`.
    pub fn firing_count(
        &self,
        event: &str,
    ) -> u64 {
        self.state.borrow().counters.get(event)
    }

    /// Число подписок на точное имя `event`.
    pub fn subscription_count(
        &self,
        event: &str,
    ) -> usize {
        self.state.borrow().registry.subscriptions(event).len()
    }

    /// Число обработчиков пары (событие, контекст).
    pub fn handler_count(
        &self,
        event: &str,
        context: &C,
    ) -> usize {
        self.state
            .borrow()
            .registry
            .find(event, context)
            .map_or(0, |s| s.handler_count())
    }

    pub fn is_subscribed(
        &self,
        event: &str,
        context: &C,
    ) -> bool {
        self.state.borrow().registry.find(event, context).is_some()
    }

    /// Текущий режим доставки подписки пары, если она есть.
    pub fn delivery_mode(
        &self,
        event: &str,
        context: &C,
    ) -> Option<DeliveryMode> {
        self.state
            .borrow()
            .registry
            .find(event, context)
            .map(|s| s.mode())
    }

    /// Все зарегистрированные имена событий по алфавиту.
    pub fn event_names(&self) -> Vec<String> {
        self.state.borrow().registry.event_names()
    }

    pub fn stats(&self) -> EmitterStats {
        let state = self.state.borrow();
        EmitterStats {
            events: state.registry.event_count(),
            subscriptions: state.registry.subscription_total(),
            handlers: state.registry.handler_total(),
            total_firings: state.counters.total(),
            firings: state
                .counters
                .iter()
                .map(|(name, count)| (name.to_string(), count))
                .collect(),
        }
    }
}

impl<C: Clone + Eq + 'static> Default for Emitter<C> {
    fn default() -> Self {
        Self::new()
    }
}
