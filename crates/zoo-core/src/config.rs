//! Configuration loading for the zoo routine and roster.
//!
//! The driver reads `zoo-config.yaml` (if present) into a [`ZooConfig`].
//! Every field has a default, so an empty document yields the standard
//! fourteen-animal zoo with one announcer and the full daily routine.

use std::path::Path;

use serde::Deserialize;
use zoo_types::{Chore, Species};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but is not usable.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ZooConfig {
    /// How the routine is run.
    #[serde(default)]
    pub routine: RoutineConfig,

    /// The animals in the zoo, in order.
    #[serde(default = "default_roster")]
    pub roster: Vec<RosterEntry>,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            routine: RoutineConfig::default(),
            roster: default_roster(),
        }
    }
}

impl ZooConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some((index, _)) = self
            .roster
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.name.trim().is_empty())
        {
            return Err(ConfigError::Invalid {
                reason: format!("roster entry {index} has an empty name"),
            });
        }
        Ok(())
    }
}

/// Routine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoutineConfig {
    /// Seed for the feline impulse generator. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of announcers to subscribe before the routine starts.
    #[serde(default = "default_announcers")]
    pub announcers: u32,

    /// Chores to perform, in order.
    #[serde(default = "default_chores")]
    pub chores: Vec<Chore>,
}

impl Default for RoutineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            announcers: default_announcers(),
            chores: default_chores(),
        }
    }
}

/// One animal in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    /// The animal's name.
    pub name: String,
    /// The animal's species (variant name or type label).
    pub species: Species,
}

impl RosterEntry {
    fn new(name: &str, species: Species) -> Self {
        Self {
            name: name.to_owned(),
            species,
        }
    }
}

const fn default_announcers() -> u32 {
    1
}

fn default_chores() -> Vec<Chore> {
    Chore::ROUTINE.to_vec()
}

fn default_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new("Charles", Species::Cat),
        RosterEntry::new("Chuck", Species::Cat),
        RosterEntry::new("Dave", Species::Dragonfly),
        RosterEntry::new("Donna", Species::Dragonfly),
        RosterEntry::new("Lance", Species::Lion),
        RosterEntry::new("Lily", Species::Lion),
        RosterEntry::new("Larry", Species::Lobster),
        RosterEntry::new("Lenny", Species::Lobster),
        RosterEntry::new("Oscar", Species::Ostrich),
        RosterEntry::new("Olive", Species::Ostrich),
        RosterEntry::new("Terry", Species::Tiger),
        RosterEntry::new("Tammy", Species::Tiger),
        RosterEntry::new("Tony", Species::TRex),
        RosterEntry::new("Toni", Species::TRex),
    ]
}
