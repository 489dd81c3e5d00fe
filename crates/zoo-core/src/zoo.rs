//! The zoo: an ordered, append-only collection of animals.
//!
//! Traversal always starts from the first animal appended, so the same
//! zoo can be walked once per chore.

use std::collections::BTreeMap;

use serde::Serialize;
use zoo_animals::Animal;
use zoo_types::Species;

/// An ordered collection of animals. Insertion order is preserved and
/// duplicates are allowed.
#[derive(Debug, Clone, Default)]
pub struct Zoo {
    animals: Vec<Animal>,
}

/// Head count of a zoo at one moment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Census {
    /// Total number of animals.
    pub total: usize,
    /// Number of animals currently awake.
    pub awake: usize,
    /// Number of animals per species.
    pub by_species: BTreeMap<Species, usize>,
}

impl Zoo {
    /// Create an empty zoo.
    pub const fn new() -> Self {
        Self {
            animals: Vec::new(),
        }
    }

    /// Add an animal at the end.
    pub fn append(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    /// Number of animals.
    pub fn len(&self) -> usize {
        self.animals.len()
    }

    /// Whether the zoo has no animals.
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Walk the animals in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Animal> {
        self.animals.iter()
    }

    /// Walk the animals mutably in insertion order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Animal> {
        self.animals.iter_mut()
    }

    /// Count animals, awake animals, and animals per species.
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for animal in &self.animals {
            census.total = census.total.saturating_add(1);
            if animal.is_awake() {
                census.awake = census.awake.saturating_add(1);
            }
            let entry = census.by_species.entry(animal.species()).or_insert(0);
            *entry = entry.saturating_add(1);
        }
        census
    }
}

impl<'a> IntoIterator for &'a Zoo {
    type Item = &'a Animal;
    type IntoIter = core::slice::Iter<'a, Animal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Zoo {
    type Item = &'a mut Animal;
    type IntoIter = core::slice::IterMut<'a, Animal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl FromIterator<Animal> for Zoo {
    fn from_iter<I: IntoIterator<Item = Animal>>(iter: I) -> Self {
        Self {
            animals: iter.into_iter().collect(),
        }
    }
}

impl Extend<Animal> for Zoo {
    fn extend<I: IntoIterator<Item = Animal>>(&mut self, iter: I) {
        self.animals.extend(iter);
    }
}
