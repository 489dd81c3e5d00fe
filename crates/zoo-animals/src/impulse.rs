//! Feline impulse sources.
//!
//! Felines answer a request to roam, make noise, or sleep by picking one
//! of three [`Impulse`]s with equal probability. The pick is drawn from an
//! [`ImpulseSource`] so callers decide whether it is random or scripted.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use zoo_types::Impulse;

/// Anything that can hand out feline impulses.
pub trait ImpulseSource {
    /// Produce the next impulse.
    fn next_impulse(&mut self) -> Impulse;
}

/// The generator the driver uses: [`RandomImpulses`] over [`StdRng`].
pub type SeededImpulses = RandomImpulses<StdRng>;

/// Draws impulses uniformly (1/3 each) from a random number generator.
#[derive(Debug, Clone)]
pub struct RandomImpulses<R> {
    rng: R,
}

impl<R: Rng> RandomImpulses<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl SeededImpulses {
    /// A reproducible source seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ImpulseSource for RandomImpulses<R> {
    fn next_impulse(&mut self) -> Impulse {
        let impulse = match self.rng.random_range(0..3_u8) {
            0 => Impulse::Nap,
            1 => Impulse::Prowl,
            _ => Impulse::Vocalize,
        };
        debug!(?impulse, "feline impulse drawn");
        impulse
    }
}

/// Replays a fixed sequence of impulses, starting over when it runs out.
///
/// An empty script always yields [`Impulse::Nap`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedImpulses {
    script: Vec<Impulse>,
    cursor: usize,
}

impl ScriptedImpulses {
    /// Replay `script` cyclically.
    pub const fn new(script: Vec<Impulse>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Always yield the same impulse.
    pub fn always(impulse: Impulse) -> Self {
        Self::new(vec![impulse])
    }
}

impl ImpulseSource for ScriptedImpulses {
    fn next_impulse(&mut self) -> Impulse {
        let Some(&impulse) = self.script.get(self.cursor) else {
            return Impulse::Nap;
        };
        self.cursor = self.cursor.saturating_add(1);
        if self.cursor >= self.script.len() {
            self.cursor = 0;
        }
        impulse
    }
}
