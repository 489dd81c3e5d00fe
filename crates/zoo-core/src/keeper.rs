//! The zookeeper and the publish/subscribe seam.
//!
//! A [`Zookeeper`] holds its current action-state and an ordered list of
//! subscribers. Each chore sets a new action-state, which synchronously
//! notifies every subscriber in registration order, then narrates
//! `"The zookeeper is {action}"`, and only then walks the zoo. Subscribers
//! hear about chores, never about individual animals.
//!
//! Subscribers are shared handles compared by identity. Registering the
//! same handle twice means it is notified twice per chore.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};
use zoo_animals::{ActionContext, Narrator};
use zoo_types::{Chore, KeeperId};

use crate::zoo::Zoo;

/// Something that wants to hear about the zookeeper's action-state.
pub trait Observer {
    /// Called once per action-state change with the new action.
    fn update(&mut self, action: &str, out: &mut dyn Narrator);
}

/// A subscriber handle as stored by a [`Subject`].
pub type SharedObserver = Rc<RefCell<dyn Observer>>;

/// The publishing half of the observer pattern.
pub trait Subject {
    /// Append `observer` to the subscriber list. No duplicate check.
    fn register_observer(&mut self, observer: SharedObserver);

    /// Remove the first registration of `observer`.
    ///
    /// Returns `false` (and does nothing else) if it was not registered.
    fn remove_observer(&mut self, observer: &SharedObserver) -> bool;

    /// Deliver the current action-state to every subscriber, in
    /// registration order. Returns after every subscriber has run.
    fn notify_observers(&self, out: &mut dyn Narrator);
}

/// Identity comparison for shared observers (ignores vtable metadata).
fn same_observer(a: &SharedObserver, b: &SharedObserver) -> bool {
    core::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// The coordinating actor that performs chores over a zoo.
pub struct Zookeeper {
    id: KeeperId,
    action: Option<String>,
    observers: Vec<SharedObserver>,
}

impl Zookeeper {
    /// Create a zookeeper with no action-state and no subscribers.
    pub fn new() -> Self {
        Self {
            id: KeeperId::new(),
            action: None,
            observers: Vec::new(),
        }
    }

    /// This keeper's identifier.
    pub const fn id(&self) -> KeeperId {
        self.id
    }

    /// The current action-state, or `None` before the first chore.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Number of registrations (duplicates counted separately).
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// How many times `observer` is currently registered.
    pub fn registrations(&self, observer: &SharedObserver) -> usize {
        self.observers
            .iter()
            .filter(|registered| same_observer(registered, observer))
            .count()
    }

    /// Set the action-state and notify every subscriber of it.
    pub fn set_action(&mut self, action: &str, out: &mut dyn Narrator) {
        self.action = Some(action.to_owned());
        self.action_changed(out);
    }

    fn action_changed(&self, out: &mut dyn Narrator) {
        self.notify_observers(out);
    }

    /// Perform one chore: broadcast its label, narrate it, then apply the
    /// matching operation to every animal in traversal order.
    pub fn perform(&mut self, chore: Chore, zoo: &mut Zoo, ctx: &mut ActionContext<'_>) {
        let label = chore.action_label();
        info!(keeper = %self.id, ?chore, animals = zoo.len(), "performing chore");

        self.set_action(label, ctx.narrator());
        ctx.narrate(&format!("The zookeeper is {label}"));

        for animal in zoo {
            match chore {
                Chore::Wake => animal.wake_up(ctx),
                Chore::RollCall => animal.perform_noise(ctx),
                Chore::Feed => animal.eat(ctx),
                Chore::Exercise => animal.roam(ctx),
                Chore::ShutDown => animal.sleep(ctx),
            }
        }
    }

    /// Wake every animal.
    pub fn wake(&mut self, zoo: &mut Zoo, ctx: &mut ActionContext<'_>) {
        self.perform(Chore::Wake, zoo, ctx);
    }

    /// Ask every animal for its noise.
    pub fn roll_call(&mut self, zoo: &mut Zoo, ctx: &mut ActionContext<'_>) {
        self.perform(Chore::RollCall, zoo, ctx);
    }

    /// Feed every animal.
    pub fn feed(&mut self, zoo: &mut Zoo, ctx: &mut ActionContext<'_>) {
        self.perform(Chore::Feed, zoo, ctx);
    }

    /// Let every animal roam.
    pub fn exercise(&mut self, zoo: &mut Zoo, ctx: &mut ActionContext<'_>) {
        self.perform(Chore::Exercise, zoo, ctx);
    }

    /// Put every animal to sleep.
    pub fn shut_down(&mut self, zoo: &mut Zoo, ctx: &mut ActionContext<'_>) {
        self.perform(Chore::ShutDown, zoo, ctx);
    }

    /// Perform `chores` in order over the same zoo.
    pub fn routine(&mut self, chores: &[Chore], zoo: &mut Zoo, ctx: &mut ActionContext<'_>) {
        for &chore in chores {
            self.perform(chore, zoo, ctx);
        }
    }
}

impl Default for Zookeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Zookeeper {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Zookeeper")
            .field("id", &self.id)
            .field("action", &self.action)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Subject for Zookeeper {
    fn register_observer(&mut self, observer: SharedObserver) {
        self.observers.push(observer);
        debug!(keeper = %self.id, observers = self.observers.len(), "observer registered");
    }

    fn remove_observer(&mut self, observer: &SharedObserver) -> bool {
        let Some(position) = self
            .observers
            .iter()
            .position(|registered| same_observer(registered, observer))
        else {
            debug!(keeper = %self.id, "remove_observer: not registered, ignoring");
            return false;
        };
        self.observers.remove(position);
        debug!(keeper = %self.id, observers = self.observers.len(), "observer removed");
        true
    }

    fn notify_observers(&self, out: &mut dyn Narrator) {
        let Some(action) = self.action.as_deref() else {
            debug!(keeper = %self.id, "no action-state yet, nothing to notify");
            return;
        };
        for observer in &self.observers {
            // A subscriber that is already mutably borrowed is mid-update
            // (re-entrant notify); skip it instead of panicking.
            match observer.try_borrow_mut() {
                Ok(mut observer) => observer.update(action, out),
                Err(_) => warn!(keeper = %self.id, action, "observer busy, notification skipped"),
            }
        }
    }
}
