//! The animal entity.
//!
//! An [`Animal`] has an immutable name and species, an awake flag, and a
//! noise strategy fixed at construction. All narrated state observations
//! go through [`Animal::report`], which replaces the action text with
//! `"is asleep!"` whenever the animal is asleep. Noise is the exception:
//! it is delegated straight to the [`NoiseStrategy`] and is heard even
//! from a sleeping animal.
//!
//! Felines route `roam`, `perform_noise`, and `sleep` through one random
//! dispatcher, so those three calls behave identically for that family.

use serde::Serialize;
use tracing::debug;
use zoo_types::{Family, Impulse, Noise, Species};

use crate::context::ActionContext;
use crate::error::AnimalError;
use crate::narration::Narrator;
use crate::noise::NoiseStrategy;
use crate::profile::{Roaming, SpeciesProfile};

/// Replacement action text for anything narrated while asleep.
const ASLEEP: &str = "is asleep!";

/// A single animal living in the zoo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    name: String,
    species: Species,
    awake: bool,
    noise: Noise,
}

/// Serializable point-in-time view of an animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalSnapshot {
    /// The animal's name.
    pub name: String,
    /// The animal's species.
    pub species: Species,
    /// `"{name} the {type}"`.
    pub full_name: String,
    /// Whether the animal is awake.
    pub awake: bool,
}

impl Animal {
    /// Create a sleeping animal of the given species.
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        Self {
            name: name.into(),
            species,
            awake: false,
            noise: SpeciesProfile::of(species).noise,
        }
    }

    /// Create an animal, rejecting empty or whitespace-only names.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalError::EmptyName`] if `name` is blank.
    pub fn try_new(name: impl Into<String>, species: Species) -> Result<Self, AnimalError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AnimalError::EmptyName);
        }
        Ok(Self::new(name, species))
    }

    /// Create an animal from a species name or type label such as
    /// `"T. rex"`, rejecting blank names.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalError::UnknownSpecies`] if `label` names no species,
    /// or [`AnimalError::EmptyName`] if `name` is blank.
    pub fn try_from_label(name: impl Into<String>, label: &str) -> Result<Self, AnimalError> {
        let species = label.parse::<Species>()?;
        Self::try_new(name, species)
    }

    /// The animal's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The animal's species.
    pub const fn species(&self) -> Species {
        self.species
    }

    /// The animal's family.
    pub const fn family(&self) -> Family {
        self.species.family()
    }

    /// The type label, e.g. `"Dragonfly"` or `"T. rex"`.
    pub const fn type_label(&self) -> &'static str {
        self.species.type_label()
    }

    /// Whether the animal is awake.
    pub const fn is_awake(&self) -> bool {
        self.awake
    }

    /// The noise strategy this animal was built with.
    pub const fn noise(&self) -> Noise {
        self.noise
    }

    /// `"{name} the {type}"`, regardless of awake state.
    pub fn full_name(&self) -> String {
        format!("{} the {}", self.name, self.type_label())
    }

    /// A serializable view of the current state.
    pub fn snapshot(&self) -> AnimalSnapshot {
        AnimalSnapshot {
            name: self.name.clone(),
            species: self.species,
            full_name: self.full_name(),
            awake: self.awake,
        }
    }

    /// The reporting routine: narrate `"{full_name} {action}"`, or
    /// `"{full_name} is asleep!"` if the animal is not awake.
    pub fn report(&self, action: &str, out: &mut dyn Narrator) {
        let action = if self.awake { action } else { ASLEEP };
        out.narrate(&format!("{} {action}", self.full_name()));
    }

    /// Wake the animal. Waking an awake animal only says so.
    pub fn wake_up(&mut self, ctx: &mut ActionContext<'_>) {
        if self.awake {
            self.report("is already awake!", ctx.narrator());
        } else {
            self.awake = true;
            debug!(animal = %self.full_name(), "woke up");
            self.report("wakes up.", ctx.narrator());
        }
    }

    /// Put the animal to sleep. Felines act on impulse instead.
    pub fn sleep(&mut self, ctx: &mut ActionContext<'_>) {
        if self.is_impulsive() {
            self.act(ctx);
        } else {
            self.settle(ctx.narrator());
        }
    }

    /// Narrate the species' eating description.
    pub fn eat(&mut self, ctx: &mut ActionContext<'_>) {
        let eats = SpeciesProfile::of(self.species).eats;
        self.report(eats, ctx.narrator());
    }

    /// Narrate the roaming description. Felines act on impulse instead.
    pub fn roam(&mut self, ctx: &mut ActionContext<'_>) {
        match SpeciesProfile::of(self.species).roaming {
            Roaming::Describe(text) => self.report(text, ctx.narrator()),
            Roaming::Impulsive => self.act(ctx),
        }
    }

    /// Make noise through the noise strategy. Felines act on impulse
    /// instead.
    ///
    /// Does not consult the awake flag: a sleeping non-feline is still
    /// heard.
    pub fn perform_noise(&mut self, ctx: &mut ActionContext<'_>) {
        if self.is_impulsive() {
            self.act(ctx);
        } else {
            self.vocalize(ctx.narrator());
        }
    }

    const fn is_impulsive(&self) -> bool {
        matches!(self.family(), Family::Feline)
    }

    /// The feline dispatcher: one uniformly drawn impulse per call.
    fn act(&mut self, ctx: &mut ActionContext<'_>) {
        let impulse = ctx.next_impulse();
        debug!(animal = %self.full_name(), ?impulse, "acting on impulse");
        match impulse {
            Impulse::Nap => self.settle(ctx.narrator()),
            Impulse::Prowl => self.report("runs around.", ctx.narrator()),
            Impulse::Vocalize => self.vocalize(ctx.narrator()),
        }
    }

    /// Ordinary sleep logic shared by every family.
    fn settle(&mut self, out: &mut dyn Narrator) {
        if self.awake {
            self.report("goes to sleep.", out);
            self.awake = false;
            debug!(animal = %self.full_name(), "went to sleep");
        } else {
            self.report("", out);
        }
    }

    fn vocalize(&self, out: &mut dyn Narrator) {
        self.noise.make_noise(&self.full_name(), out);
    }
}
