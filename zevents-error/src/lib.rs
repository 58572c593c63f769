//! Ошибки `zevents`: код статуса, трейт [`ErrorExt`] для конкретных ошибок и
//! [`StackError`] с цепочкой контекстов.
//!
//! Операции эмиттера не возвращают ошибок; здесь только ошибки настроек и
//! инициализации логирования.

pub mod ext;
pub mod macros;
pub mod stack;
pub mod status_code;
pub mod types;

pub use ext::ErrorExt;
pub use macros::ResultExt;
pub use stack::{ErrorContext, StackError};
pub use status_code::StatusCode;
pub use types::{LoggingError, SettingsError};

pub type ZeventsResult<T> = Result<T, StackError>;
