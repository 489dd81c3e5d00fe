//! Error types for the zoo engine binary.
//!
//! [`EngineError`] wraps every failure mode during startup and the
//! routine, so `main` can propagate with `?`.

/// Top-level error for the zoo engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: zoo_core::ConfigError,
    },

    /// An animal in the roster could not be built.
    #[error("roster error: {source}")]
    Roster {
        /// The underlying animal error.
        #[from]
        source: zoo_animals::AnimalError,
    },

    /// An announcer could not be disposed.
    #[error("subscription error: {source}")]
    Subscription {
        /// The underlying zoo error.
        #[from]
        source: zoo_core::ZooError,
    },

    /// The closing census could not be serialized.
    #[error("census error: {source}")]
    Census {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
