use std::fmt;

use num_enum::TryFromPrimitive;

/// Код статуса ошибки окружения эмиттера.
///
/// Все коды лежат в диапазоне 9xxx (настройки и логирование): сами операции
/// эмиттера не завершаются ошибкой.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    /// Значение настройки прочитано, но недопустимо.
    ConfigInvalid = 9000,
    /// Источник настроек не удалось прочитать или разобрать.
    ConfigLoadFailed = 9001,
    /// Глобальный subscriber уже установлен.
    LoggingInitFailed = 9002,
}

impl StatusCode {
    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}
