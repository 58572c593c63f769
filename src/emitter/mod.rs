//! Иерархический эмиттер событий.
//!
//! - `emitter`: публичный дескриптор [`Emitter`]: подписка, отписка,
//!   уведомление, интроспекция.
//! - `registry`: реестр подписок, слияние по паре (событие, контекст) и
//!   удаление вниз по иерархии.
//! - `dispatch` (приватный): снимок доставок для одного префикса.
//! - `policy`: решение о доставке (limit / throttle).
//! - `counters`: счётчики срабатываний по точному имени.
//! - `topic`: предки и потомки имён событий.
//! - `context`: идентичность контекстов подписки.
//! - `stats`: сериализуемый снимок состояния.

pub mod context;
pub mod counters;
mod dispatch;
#[allow(clippy::module_inception)]
pub mod emitter;
pub mod policy;
pub mod registry;
pub mod stats;
pub mod subscription;
pub mod topic;

pub use context::{Context, ContextId};
pub use counters::FiringCounters;
pub use emitter::{Emitter, WeakEmitter};
pub use policy::{should_deliver, DeliveryMode};
pub use registry::Registry;
pub use stats::EmitterStats;
pub use subscription::{Handler, Subscription};
pub use topic::{ancestors, depth, is_self_or_descendant, Ancestors, DEFAULT_SEPARATOR};
