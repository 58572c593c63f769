//! Топология имён событий.
//!
//! Имя события: строка из сегментов, разделённых символом-разделителем
//! (по умолчанию `.`): `view.click.left`. Уведомление поднимается вверх по
//! предкам, отписка спускается вниз по потомкам.

/// Разделитель сегментов по умолчанию.
pub const DEFAULT_SEPARATOR: char = '.';

/// Итератор по имени события и всем его предкам, от самого точного к самому
/// общему: `"a.b.c"` → `"a.b.c"`, `"a.b"`, `"a"`.
///
/// Пустые сегменты сохраняются как есть: `"a..b"` → `"a..b"`, `"a."`, `"a"`.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    rest: Option<&'a str>,
    separator: char,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.rest?;
        self.rest = current.rfind(self.separator).map(|idx| &current[..idx]);
        Some(current)
    }
}

/// Возвращает итератор по `event` и его предкам.
pub fn ancestors(
    event: &str,
    separator: char,
) -> Ancestors<'_> {
    Ancestors {
        rest: Some(event),
        separator,
    }
}

/// `true`, если `candidate` совпадает с `target` или является его потомком
/// (начинается с `target` + разделитель).
pub fn is_self_or_descendant(
    candidate: &str,
    target: &str,
    separator: char,
) -> bool {
    match candidate.strip_prefix(target) {
        Some("") => true,
        Some(rest) => rest.starts_with(separator),
        None => false,
    }
}

/// Количество сегментов в имени события.
pub fn depth(
    event: &str,
    separator: char,
) -> usize {
    event.matches(separator).count() + 1
}
