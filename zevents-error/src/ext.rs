use std::{any::Any, error::Error};

use crate::StatusCode;

/// Общий интерфейс конкретных ошибок, которые можно завернуть в
/// [`StackError`](crate::StackError).
pub trait ErrorExt: Error + Send + Sync + 'static {
    fn status_code(&self) -> StatusCode;

    /// Нужен для [`StackError::downcast_ref`](crate::StackError::downcast_ref).
    fn as_any(&self) -> &dyn Any;
}
