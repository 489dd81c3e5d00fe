//! Per-call context handed to every narrating operation.

use zoo_types::Impulse;

use crate::impulse::ImpulseSource;
use crate::narration::Narrator;

/// Where an operation narrates to, and where felines draw impulses from.
///
/// Both halves are borrowed for the duration of a batch of calls, so one
/// context can drive a whole routine.
pub struct ActionContext<'a> {
    narrator: &'a mut dyn Narrator,
    impulses: &'a mut dyn ImpulseSource,
}

impl<'a> ActionContext<'a> {
    /// Bundle a narrator and an impulse source.
    pub fn new(narrator: &'a mut dyn Narrator, impulses: &'a mut dyn ImpulseSource) -> Self {
        Self { narrator, impulses }
    }

    /// Emit one line through the narrator.
    pub fn narrate(&mut self, line: &str) {
        self.narrator.narrate(line);
    }

    /// Draw the next feline impulse.
    pub fn next_impulse(&mut self) -> Impulse {
        self.impulses.next_impulse()
    }

    /// Reborrow the narrator on its own (for observers, which never roll
    /// impulses).
    pub fn narrator(&mut self) -> &mut dyn Narrator {
        &mut *self.narrator
    }
}

impl core::fmt::Debug for ActionContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionContext").finish_non_exhaustive()
    }
}
