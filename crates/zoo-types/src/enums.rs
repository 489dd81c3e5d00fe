//! Enumeration types for the zoo simulation.
//!
//! Every set here is closed: adding a species, noise, or chore forces
//! each exhaustive `match` in the workspace to account for it.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Species and families
// ---------------------------------------------------------------------------

/// A concrete species that can live in the zoo.
///
/// Serializes as the variant name (`"TRex"`). Deserializes from either the
/// variant name or the display label (`"T. rex"`), case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Species {
    /// An invertebrate that flutters about.
    Dragonfly,
    /// An invertebrate that scuttles around.
    Lobster,
    /// A hooting reptile.
    Ostrich,
    /// A roaring reptile.
    TRex,
    /// A hissing feline.
    Cat,
    /// A roaring feline.
    Lion,
    /// A roaring feline.
    Tiger,
}

impl Species {
    /// Every species, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Dragonfly,
        Self::Lobster,
        Self::Ostrich,
        Self::TRex,
        Self::Cat,
        Self::Lion,
        Self::Tiger,
    ];

    /// The family this species belongs to.
    pub const fn family(self) -> Family {
        match self {
            Self::Dragonfly | Self::Lobster => Family::Invertebrate,
            Self::Ostrich | Self::TRex => Family::Reptile,
            Self::Cat | Self::Lion | Self::Tiger => Family::Feline,
        }
    }

    /// The type label used in an animal's full name.
    pub const fn type_label(self) -> &'static str {
        match self {
            Self::Dragonfly => "Dragonfly",
            Self::Lobster => "Lobster",
            Self::Ostrich => "Ostrich",
            Self::TRex => "T. rex",
            Self::Cat => "Cat",
            Self::Lion => "Lion",
            Self::Tiger => "Tiger",
        }
    }
}

impl core::fmt::Display for Species {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.type_label())
    }
}

/// A species name that matched neither a variant name nor a type label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown species: {0:?}")]
pub struct UnknownSpecies(pub String);

/// Lowercase and drop separators so `"T. rex"`, `"t_rex"`, and `"TRex"` agree.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|species| normalize(species.type_label()) == wanted)
            .ok_or_else(|| UnknownSpecies(s.to_owned()))
    }
}

impl TryFrom<String> for Species {
    type Error = UnknownSpecies;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The family grouping that decides shared behavior.
///
/// Invertebrates are silent, reptiles share a roam description, and
/// felines route roaming, noise, and sleep through a random impulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    /// Dragonflies and lobsters.
    Invertebrate,
    /// Ostriches and tyrannosaurs.
    Reptile,
    /// Cats, lions, and tigers.
    Feline,
}

// ---------------------------------------------------------------------------
// Noise and impulses
// ---------------------------------------------------------------------------

/// The vocalization an animal makes when asked for noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Noise {
    /// "roars."
    Roar,
    /// "is silent."
    Silence,
    /// "hoots."
    Hoot,
    /// "hisses."
    Hiss,
}

/// One of the three equally likely things a feline does when prompted to
/// roam, make noise, or sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Impulse {
    /// Run the ordinary sleep logic.
    Nap,
    /// Run around.
    Prowl,
    /// Make the species noise.
    Vocalize,
}

impl Impulse {
    /// Every impulse, in draw order.
    pub const ALL: [Self; 3] = [Self::Nap, Self::Prowl, Self::Vocalize];
}

// ---------------------------------------------------------------------------
// Chores
// ---------------------------------------------------------------------------

/// A batch operation the zookeeper performs over the whole zoo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chore {
    /// Wake every animal.
    Wake,
    /// Ask every animal for its noise.
    RollCall,
    /// Feed every animal.
    Feed,
    /// Let every animal roam.
    Exercise,
    /// Put every animal to sleep.
    ShutDown,
}

impl Chore {
    /// The full daily routine, in order.
    pub const ROUTINE: [Self; 5] = [
        Self::Wake,
        Self::RollCall,
        Self::Feed,
        Self::Exercise,
        Self::ShutDown,
    ];

    /// The action-state label broadcast when this chore starts.
    pub const fn action_label(self) -> &'static str {
        match self {
            Self::Wake => "waking the animals.",
            Self::RollCall => "calling roll.",
            Self::Feed => "feeding the animals.",
            Self::Exercise => "exercising the animals.",
            Self::ShutDown => "shutting down the zoo.",
        }
    }
}
