//! Вызовы эмиттера из обработчиков и поведение при панике обработчика.

use std::{
    cell::RefCell,
    panic::{self, AssertUnwindSafe},
    rc::Rc,
};

use zevents::{ContextId, Emitter};

type Log = Rc<RefCell<Vec<&'static str>>>;

fn push(
    log: &Log,
    tag: &'static str,
) -> impl Fn(&ContextId) + 'static {
    let log = Rc::clone(log);
    move |_: &ContextId| log.borrow_mut().push(tag)
}

/// Тест проверяет, что подписка изнутри обработчика не получает текущее
/// уведомление, но получает следующее.
#[test]
fn test_subscribe_during_dispatch_takes_effect_next_time() {
    let emitter = Emitter::new();
    let log: Log = Rc::default();
    let weak = emitter.downgrade();
    let late = ContextId::next();
    let inner_log = Rc::clone(&log);

    emitter.subscribe("e", ContextId::next(), move |_| {
        inner_log.borrow_mut().push("outer");
        if let Some(e) = weak.upgrade() {
            if !e.is_subscribed("e", &late) {
                e.subscribe("e", late, push(&inner_log, "late"));
            }
        }
    });

    emitter.notify("e");
    assert_eq!(*log.borrow(), vec!["outer"]);

    emitter.notify("e");
    assert_eq!(*log.borrow(), vec!["outer", "outer", "late"]);
}

/// Тест проверяет, что отписка более поздней подписки во время доставки
/// не отменяет её в текущем вызове, но действует со следующего.
#[test]
fn test_unsubscribe_during_dispatch_applies_from_next_notify() {
    let emitter = Emitter::new();
    let log: Log = Rc::default();
    let weak = emitter.downgrade();
    let victim = ContextId::next();
    let inner_log = Rc::clone(&log);

    emitter
        .subscribe("e", ContextId::next(), move |_| {
            inner_log.borrow_mut().push("killer");
            if let Some(e) = weak.upgrade() {
                e.unsubscribe("e", &victim);
            }
        })
        .subscribe("e", victim, push(&log, "victim"));

    emitter.notify("e");
    assert_eq!(*log.borrow(), vec!["killer", "victim"]);

    emitter.notify("e");
    assert_eq!(*log.borrow(), vec!["killer", "victim", "killer"]);
}

/// Тест проверяет, что изменение подписок предка во время обработки
/// потомка видно, когда обход доходит до предка.
#[test]
fn test_ancestor_snapshot_taken_when_reached() {
    let emitter = Emitter::new();
    let log: Log = Rc::default();
    let weak = emitter.downgrade();
    let parent = ContextId::next();
    let inner_log = Rc::clone(&log);

    emitter.subscribe("a.b", ContextId::next(), move |_| {
        if let Some(e) = weak.upgrade() {
            e.subscribe("a", parent, push(&inner_log, "parent"));
        }
    });

    emitter.notify("a.b");
    assert_eq!(*log.borrow(), vec!["parent"]);
}

/// Тест проверяет, что вложенный notify делит счётчики с внешним.
#[test]
fn test_nested_notify_shares_counters() {
    let emitter = Emitter::new();
    let firings = Rc::new(RefCell::new(Vec::new()));
    let weak = emitter.downgrade();
    let seen = Rc::clone(&firings);

    emitter
        .subscribe("outer", ContextId::next(), move |_| {
            if let Some(e) = weak.upgrade() {
                e.notify("inner").notify("inner");
            }
        })
        .subscribe_limited(
            "inner",
            ContextId::next(),
            move |_| seen.borrow_mut().push("inner"),
            3,
        );

    emitter.notify("outer").notify("outer");

    assert_eq!(emitter.firing_count("inner"), 4);
    assert_eq!(emitter.firing_count("outer"), 2);
    assert_eq!(firings.borrow().len(), 3);
}

/// Тест проверяет, что паника обработчика прерывает остаток уведомления:
/// последующие обработчики и предки не обрабатываются, эмиттер остаётся
/// пригодным.
#[test]
fn test_handler_panic_aborts_rest_of_notify() {
    let emitter = Emitter::new();
    let log: Log = Rc::default();
    let armed = Rc::new(RefCell::new(true));
    let trigger = Rc::clone(&armed);

    emitter
        .subscribe("a.b", ContextId::next(), move |_| {
            if *trigger.borrow() {
                panic!("handler failed");
            }
        })
        .subscribe("a.b", ContextId::next(), push(&log, "sibling"))
        .subscribe("a", ContextId::next(), push(&log, "parent"));

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        emitter.notify("a.b");
    }));
    assert!(result.is_err());
    assert!(log.borrow().is_empty());
    assert_eq!(emitter.firing_count("a.b"), 1);
    assert_eq!(emitter.firing_count("a"), 0);

    *armed.borrow_mut() = false;
    emitter.notify("a.b");
    assert_eq!(*log.borrow(), vec!["sibling", "parent"]);
    assert_eq!(emitter.firing_count("a.b"), 2);
    assert_eq!(emitter.firing_count("a"), 1);
}

/// Тест проверяет, что обработчик может снять собственную подписку.
#[test]
fn test_handler_unsubscribes_itself() {
    let emitter = Emitter::new();
    let calls = Rc::new(RefCell::new(0));
    let weak = emitter.downgrade();
    let me = ContextId::next();
    let counter = Rc::clone(&calls);

    emitter.subscribe("once", me, move |ctx: &ContextId| {
        *counter.borrow_mut() += 1;
        if let Some(e) = weak.upgrade() {
            e.unsubscribe("once", ctx);
        }
    });

    emitter.notify("once").notify("once");

    assert_eq!(*calls.borrow(), 1);
    assert!(!emitter.is_subscribed("once", &me));
}
