//! Error types for the zoo-core crate.

use zoo_types::{AnnouncerId, KeeperId};

/// Errors that can occur while managing subscriptions.
#[derive(Debug, thiserror::Error)]
pub enum ZooError {
    /// An announcer was disposed against a keeper it never registered with.
    #[error("announcer {announcer} belongs to keeper {expected}, not {found}")]
    ForeignKeeper {
        /// The announcer being disposed.
        announcer: AnnouncerId,
        /// The keeper the announcer registered with.
        expected: KeeperId,
        /// The keeper passed to `dispose`.
        found: KeeperId,
    },
}
