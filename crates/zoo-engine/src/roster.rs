//! Building the zoo from the configured roster.

use tracing::{debug, info};
use zoo_animals::{Animal, AnimalError};
use zoo_core::{RosterEntry, Zoo};

/// Build a zoo holding one animal per roster entry, in roster order.
///
/// # Errors
///
/// Returns [`AnimalError::EmptyName`] if an entry has a blank name.
pub fn build_zoo(roster: &[RosterEntry]) -> Result<Zoo, AnimalError> {
    let mut zoo = Zoo::new();
    for entry in roster {
        let animal = Animal::try_new(entry.name.clone(), entry.species)?;
        debug!(animal = %animal.full_name(), family = ?animal.family(), "animal admitted");
        zoo.append(animal);
    }
    info!(animals = zoo.len(), "zoo populated");
    Ok(zoo)
}
