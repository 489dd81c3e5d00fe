//! Per-species behavior data.
//!
//! Family-level defaults are resolved here: invertebrates are silent,
//! reptiles share one roam description, and felines roam on impulse.
//! Everything else is fixed by the species.

use zoo_types::{Family, Noise, Species};

/// Roam description shared by every reptile.
const REPTILE_ROAM: &str = "prances about.";

/// What an animal does when asked to roam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roaming {
    /// Narrate the given description.
    Describe(&'static str),
    /// Draw a feline impulse instead.
    Impulsive,
}

/// Fixed behavior data for one species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesProfile {
    /// Description narrated on eating.
    pub eats: &'static str,
    /// Roaming behavior.
    pub roaming: Roaming,
    /// Noise strategy.
    pub noise: Noise,
}

impl SpeciesProfile {
    /// Look up the profile for `species`.
    pub const fn of(species: Species) -> Self {
        let eats = match species {
            Species::Dragonfly => "eats some mosquitoes.",
            Species::Lobster => "eats some fish.",
            Species::Ostrich => "eats some seeds.",
            Species::TRex => "eats a steak.",
            Species::Cat => "eats some cat food.",
            Species::Lion => "eats a zebra.",
            Species::Tiger => "eats an antelope.",
        };

        let roaming = match (species.family(), species) {
            (Family::Feline, _) => Roaming::Impulsive,
            (Family::Reptile, _) => Roaming::Describe(REPTILE_ROAM),
            (Family::Invertebrate, Species::Lobster) => Roaming::Describe("scuttles around."),
            (Family::Invertebrate, _) => Roaming::Describe("flutters about."),
        };

        let noise = match species {
            Species::Dragonfly | Species::Lobster => Noise::Silence,
            Species::Ostrich => Noise::Hoot,
            Species::Cat => Noise::Hiss,
            Species::TRex | Species::Lion | Species::Tiger => Noise::Roar,
        };

        Self {
            eats,
            roaming,
            noise,
        }
    }
}
