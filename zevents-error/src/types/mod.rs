pub mod logging;
pub mod settings;

pub use logging::LoggingError;
pub use settings::SettingsError;
