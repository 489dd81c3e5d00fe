//! Error types for the zoo-animals crate.
//!
//! Every animal action is total, so errors only arise when building an
//! animal from untrusted input.

use zoo_types::UnknownSpecies;

/// Errors that can occur while constructing an animal.
#[derive(Debug, thiserror::Error)]
pub enum AnimalError {
    /// The animal's name was empty or whitespace.
    #[error("animal name must not be empty")]
    EmptyName,

    /// The species name did not match any known species.
    #[error("{source}")]
    UnknownSpecies {
        /// The underlying parse error.
        #[from]
        source: UnknownSpecies,
    },
}
