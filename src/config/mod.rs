//! Загрузка настроек эмиттера (`config` crate: значения по умолчанию,
//! TOML-файл, переменные окружения `ZEVENTS_*`).

pub mod settings;

pub use settings::EmitterSettings;
