//! Shared type definitions for the zoo simulation.
//!
//! This crate holds the identifiers and closed enumerations that every
//! other crate in the workspace speaks in terms of. It contains no
//! behavior beyond lookups and parsing.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for keepers and announcers
//! - [`enums`] -- Species, families, noises, feline impulses, and chores

pub mod enums;
pub mod ids;

pub use enums::{Chore, Family, Impulse, Noise, Species, UnknownSpecies};
pub use ids::{AnnouncerId, KeeperId};
