use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Стабильный идентификатор контекста подписки.
///
/// Уникален в пределах процесса. Два подписчика с одинаковым `ContextId`
/// считаются одним и тем же контекстом.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextId(u64);

impl ContextId {
    /// Выдаёт новый, ранее не использованный идентификатор.
    pub fn next() -> Self {
        Self(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Идентификатор из заранее известного числа (например, id сущности).
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContextId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "ctx#{}", self.0)
    }
}

/// Получатель обработчиков вместе с его идентичностью.
///
/// Сравнение и хеширование идут только по [`ContextId`], поэтому два
/// `Context` с одинаковым содержимым, созданные отдельно, различны, а клоны
/// одного `Context` равны. Разыменовывается в `T`.
pub struct Context<T> {
    id: ContextId,
    value: Rc<T>,
}

impl<T> Context<T> {
    pub fn new(value: T) -> Self {
        Self {
            id: ContextId::next(),
            value: Rc::new(value),
        }
    }

    pub fn id(&self) -> ContextId {
        self.id
    }
}

impl<T> Clone for Context<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            value: Rc::clone(&self.value),
        }
    }
}

impl<T> PartialEq for Context<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Context<T> {}

impl<T> Hash for Context<T> {
    fn hash<H: Hasher>(
        &self,
        state: &mut H,
    ) {
        self.id.hash(state);
    }
}

impl<T> Deref for Context<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Context<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Context")
            .field("id", &self.id)
            .field("value", &self.value)
            .finish()
    }
}
