//! Animal state, behavior, and narration for the zoo simulation.
//!
//! This crate is the logic layer for individual animals. It knows how an
//! animal wakes, sleeps, eats, roams, and makes noise, and how those
//! actions are narrated, but nothing about zoos or zookeepers.
//!
//! # Modules
//!
//! - [`animal`] -- The [`Animal`] entity and its reporting routine
//! - [`context`] -- [`ActionContext`], the narration sink plus impulse source
//! - [`error`] -- Error types for animal construction ([`AnimalError`])
//! - [`impulse`] -- Feline impulse sources ([`RandomImpulses`], [`ScriptedImpulses`])
//! - [`narration`] -- The [`Narrator`] seam ([`ConsoleNarrator`], [`Transcript`])
//! - [`noise`] -- The [`NoiseStrategy`] behavior for each [`Noise`]
//! - [`profile`] -- Per-species eating, roaming, and noise data
//!
//! [`Noise`]: zoo_types::Noise

pub mod animal;
pub mod context;
pub mod error;
pub mod impulse;
pub mod narration;
pub mod noise;
pub mod profile;

// Re-export primary types at crate root for convenience.
pub use animal::{Animal, AnimalSnapshot};
pub use context::ActionContext;
pub use error::AnimalError;
pub use impulse::{ImpulseSource, RandomImpulses, ScriptedImpulses, SeededImpulses};
pub use narration::{ConsoleNarrator, Narrator, Transcript};
pub use noise::NoiseStrategy;
pub use profile::{Roaming, SpeciesProfile};
