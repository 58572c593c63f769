/// Возвращает `Err(StackError::from(err))`, если условие ложно.
///
/// ```ignore
/// ensure!(sep != ' ', SettingsError::InvalidSeparator { separator: sep });
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($crate::StackError::from($err));
        }
    };
}

/// Добавление контекста к ошибке прямо на `Result`.
pub trait ResultExt<T> {
    #[track_caller]
    fn context<M>(
        self,
        message: M,
    ) -> Result<T, crate::StackError>
    where
        M: Into<String>;

    /// Как [`context`](Self::context), но сообщение строится только при
    /// ошибке.
    #[track_caller]
    fn with_context<M, F>(
        self,
        f: F,
    ) -> Result<T, crate::StackError>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<crate::StackError>,
{
    #[track_caller]
    fn context<M>(
        self,
        message: M,
    ) -> Result<T, crate::StackError>
    where
        M: Into<String>,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.into().context(message)),
        }
    }

    #[track_caller]
    fn with_context<M, F>(
        self,
        f: F,
    ) -> Result<T, crate::StackError>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.into().context(f())),
        }
    }
}
