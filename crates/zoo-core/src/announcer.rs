//! The zoo announcer, a stock [`Observer`] of the zookeeper.
//!
//! Subscribing is an explicit step ([`Announcer::subscribe`]) that hands
//! back an [`AnnouncerHandle`]. The handle remembers which keeper it is
//! registered with and must be disposed against that keeper to
//! deregister. [`Announcer::scoped`] pairs the two around a closure and
//! disposes from a drop guard, so a panicking closure still deregisters.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use zoo_animals::Narrator;
use zoo_types::{AnnouncerId, KeeperId};

use crate::error::ZooError;
use crate::keeper::{Observer, SharedObserver, Subject, Zookeeper};

/// Announces each new zookeeper action-state.
///
/// Identity and the owning keeper live on the [`AnnouncerHandle`].
#[derive(Debug, Default)]
pub struct Announcer {
    action: Option<String>,
}

impl Announcer {
    /// Create an announcer and register it with `keeper`.
    ///
    /// The registration is in place when this returns, so every later
    /// chore on `keeper` reaches the announcer.
    pub fn subscribe(keeper: &mut Zookeeper) -> AnnouncerHandle {
        let id = AnnouncerId::new();
        let inner = Rc::new(RefCell::new(Self::default()));
        keeper.register_observer(Rc::clone(&inner) as SharedObserver);
        debug!(announcer = %id, keeper = %keeper.id(), "announcer subscribed");
        AnnouncerHandle {
            inner,
            id,
            keeper: keeper.id(),
        }
    }

    /// Subscribe an announcer, run `f`, then dispose the announcer.
    ///
    /// The announcer is deregistered on every exit from `f`: a normal
    /// return, an `Err` value, or a panic unwinding through this call.
    pub fn scoped<T>(
        keeper: &mut Zookeeper,
        f: impl FnOnce(&mut Zookeeper, &AnnouncerHandle) -> T,
    ) -> T {
        let handle = Self::subscribe(keeper);
        let mut guard = DisposeOnDrop { handle, keeper };
        f(&mut *guard.keeper, &guard.handle)
    }

    /// The last action-state this announcer heard, if any.
    pub fn last_action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    fn announce(&self, out: &mut dyn Narrator) {
        if let Some(action) = &self.action {
            out.narrate(&format!(
                "This is the Zoo Announcer. The zookeeper will now be {action}"
            ));
        }
    }
}

impl Observer for Announcer {
    fn update(&mut self, action: &str, out: &mut dyn Narrator) {
        self.action = Some(action.to_owned());
        self.announce(out);
    }
}

/// Disposes its announcer from the keeper when dropped.
struct DisposeOnDrop<'k> {
    handle: AnnouncerHandle,
    keeper: &'k mut Zookeeper,
}

impl Drop for DisposeOnDrop<'_> {
    fn drop(&mut self) {
        if let Err(error) = self.handle.dispose(self.keeper) {
            warn!(%error, "scoped announcer failed to dispose");
        }
    }
}

/// Owning handle to a subscribed [`Announcer`].
#[derive(Debug, Clone)]
pub struct AnnouncerHandle {
    inner: Rc<RefCell<Announcer>>,
    id: AnnouncerId,
    keeper: KeeperId,
}

impl AnnouncerHandle {
    /// The announcer's identifier.
    pub const fn id(&self) -> AnnouncerId {
        self.id
    }

    /// The keeper this announcer registered with.
    pub const fn keeper(&self) -> KeeperId {
        self.keeper
    }

    /// The last action-state the announcer heard, if any.
    pub fn last_action(&self) -> Option<String> {
        self.inner.borrow().last_action().map(str::to_owned)
    }

    /// The announcer as a subscriber handle, e.g. to register it again.
    pub fn observer(&self) -> SharedObserver {
        Rc::clone(&self.inner) as SharedObserver
    }

    /// Deregister every registration of this announcer from `keeper`.
    ///
    /// Returns how many registrations were removed; disposing twice
    /// removes nothing the second time.
    ///
    /// # Errors
    ///
    /// Returns [`ZooError::ForeignKeeper`] if `keeper` is not the keeper
    /// this announcer subscribed to. Nothing is removed in that case.
    pub fn dispose(&self, keeper: &mut Zookeeper) -> Result<usize, ZooError> {
        if keeper.id() != self.keeper {
            return Err(ZooError::ForeignKeeper {
                announcer: self.id,
                expected: self.keeper,
                found: keeper.id(),
            });
        }
        let observer = self.observer();
        let mut removed: usize = 0;
        while keeper.remove_observer(&observer) {
            removed = removed.saturating_add(1);
        }
        debug!(announcer = %self.id, keeper = %self.keeper, removed, "announcer disposed");
        Ok(removed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use zoo_animals::{ActionContext, Animal, ScriptedImpulses, Transcript};
    use zoo_types::{Chore, Species};

    use super::*;
    use crate::zoo::Zoo;

    #[test]
    fn subscribe_registers_before_any_event() {
        let mut keeper = Zookeeper::new();
        let handle = Announcer::subscribe(&mut keeper);
        assert_eq!(keeper.observer_count(), 1);
        assert_eq!(keeper.registrations(&handle.observer()), 1);
        assert_eq!(handle.keeper(), keeper.id());
        assert_eq!(handle.last_action(), None);
    }

    #[test]
    fn update_caches_and_announces() {
        let mut keeper = Zookeeper::new();
        let handle = Announcer::subscribe(&mut keeper);

        let mut out = Transcript::new();
        keeper.set_action("waking the animals.", &mut out);

        assert_eq!(handle.last_action().as_deref(), Some("waking the animals."));
        assert_eq!(
            out.lines(),
            ["This is the Zoo Announcer. The zookeeper will now be waking the animals."]
        );
    }

    #[test]
    fn one_announcement_per_chore() {
        let mut keeper = Zookeeper::new();
        let handle = Announcer::subscribe(&mut keeper);
        let mut zoo: Zoo = [
            Animal::new("Dave", Species::Dragonfly),
            Animal::new("Donna", Species::Dragonfly),
            Animal::new("Larry", Species::Lobster),
        ]
        .into_iter()
        .collect();

        let mut out = Transcript::new();
        let mut impulses = ScriptedImpulses::default();
        let mut ctx = ActionContext::new(&mut out, &mut impulses);
        keeper.feed(&mut zoo, &mut ctx);

        let announcements = out
            .lines()
            .iter()
            .filter(|line| line.starts_with("This is the Zoo Announcer."))
            .count();
        assert_eq!(announcements, 1);
        assert_eq!(handle.last_action().as_deref(), Some("feeding the animals."));
    }

    #[test]
    fn dispose_deregisters() {
        let mut keeper = Zookeeper::new();
        let handle = Announcer::subscribe(&mut keeper);
        assert_eq!(handle.dispose(&mut keeper).unwrap(), 1);
        assert_eq!(keeper.observer_count(), 0);

        let mut out = Transcript::new();
        keeper.set_action("calling roll.", &mut out);
        assert!(out.is_empty());
        assert_eq!(handle.last_action(), None);

        // A second dispose finds nothing left to remove.
        assert_eq!(handle.dispose(&mut keeper).unwrap(), 0);
    }

    #[test]
    fn duplicate_registration_announces_twice_and_dispose_clears_both() {
        let mut keeper = Zookeeper::new();
        let handle = Announcer::subscribe(&mut keeper);
        keeper.register_observer(handle.observer());

        let mut out = Transcript::new();
        keeper.set_action("exercising the animals.", &mut out);
        assert_eq!(out.len(), 2);

        assert_eq!(handle.dispose(&mut keeper).unwrap(), 2);
        assert_eq!(keeper.observer_count(), 0);
    }

    #[test]
    fn duplicate_registration_announces_twice_per_chore() {
        let mut keeper = Zookeeper::new();
        let handle = Announcer::subscribe(&mut keeper);
        keeper.register_observer(handle.observer());
        let mut zoo: Zoo = [
            Animal::new("Oscar", Species::Ostrich),
            Animal::new("Olive", Species::Ostrich),
        ]
        .into_iter()
        .collect();

        let mut out = Transcript::new();
        let mut impulses = ScriptedImpulses::default();
        let mut ctx = ActionContext::new(&mut out, &mut impulses);
        keeper.wake(&mut zoo, &mut ctx);

        let announcement = "This is the Zoo Announcer. The zookeeper will now be waking the animals.";
        assert_eq!(
            out.lines(),
            [
                announcement,
                announcement,
                "The zookeeper is waking the animals.",
                "Oscar the Ostrich wakes up.",
                "Olive the Ostrich wakes up.",
            ]
        );
        assert_eq!(handle.dispose(&mut keeper).unwrap(), 2);
    }

    #[test]
    #[allow(clippy::panic)]
    fn scoped_announcer_is_removed_when_closure_panics() {
        let mut keeper = Zookeeper::new();

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            Announcer::scoped::<()>(&mut keeper, |keeper, _| {
                assert_eq!(keeper.observer_count(), 1);
                panic!("chore interrupted");
            })
        }));

        assert!(outcome.is_err());
        assert_eq!(keeper.observer_count(), 0);
    }

    #[test]
    fn dispose_against_foreign_keeper_fails() {
        let mut home = Zookeeper::new();
        let mut elsewhere = Zookeeper::new();
        let handle = Announcer::subscribe(&mut home);

        let err = handle.dispose(&mut elsewhere).unwrap_err();
        assert!(matches!(err, ZooError::ForeignKeeper { .. }));
        assert_eq!(home.observer_count(), 1);
    }

    #[test]
    fn scoped_announcer_is_removed_afterwards() {
        let mut keeper = Zookeeper::new();
        let mut zoo = Zoo::new();
        zoo.append(Animal::new("Tony", Species::TRex));

        let mut out = Transcript::new();
        let mut impulses = ScriptedImpulses::default();

        let heard = Announcer::scoped(&mut keeper, |keeper, handle| {
            let mut ctx = ActionContext::new(&mut out, &mut impulses);
            keeper.perform(Chore::RollCall, &mut zoo, &mut ctx);
            handle.last_action()
        });

        assert_eq!(heard.as_deref(), Some("calling roll."));
        assert_eq!(keeper.observer_count(), 0);
        assert_eq!(
            out.lines(),
            [
                "This is the Zoo Announcer. The zookeeper will now be calling roll.",
                "The zookeeper is calling roll.",
                "Tony the T. rex roars.",
            ]
        );
    }
}
