/// Emitter settings loading.
pub mod config;
/// Hierarchical event emitter: registry, dispatch, delivery policy.
pub mod emitter;
/// Logging bootstrap (tracing-subscriber).
pub mod logging;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Settings.
pub use config::EmitterSettings;
/// Emitter API.
pub use emitter::{
    Context, ContextId, DeliveryMode, Emitter, EmitterStats, Subscription, WeakEmitter,
};
/// Logging.
pub use logging::{init_logging, LogFormat, LoggingConfig};
/// Errors and result types.
pub use zevents_error::{LoggingError, SettingsError, StackError, StatusCode, ZeventsResult};
