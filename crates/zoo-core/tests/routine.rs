//! End-to-end routines over small and full zoos.
//!
//! Narration is captured with a `Transcript`; feline behavior is pinned
//! with `ScriptedImpulses` wherever exact lines are asserted.

#![allow(clippy::unwrap_used)]

use zoo_animals::{ActionContext, Animal, ScriptedImpulses, SeededImpulses, Transcript};
use zoo_core::{Announcer, Subject, Zoo, ZooConfig, Zookeeper};
use zoo_types::{Chore, Family, Impulse, Species};

fn dave_and_chuck() -> Zoo {
    let mut zoo = Zoo::new();
    zoo.append(Animal::new("Dave", Species::Dragonfly));
    zoo.append(Animal::new("Chuck", Species::Cat));
    zoo
}

fn configured_zoo(config: &ZooConfig) -> Zoo {
    config
        .roster
        .iter()
        .map(|entry| Animal::new(entry.name.clone(), entry.species))
        .collect()
}

#[test]
fn wake_narrates_in_insertion_order() {
    let mut zoo = dave_and_chuck();
    let mut keeper = Zookeeper::new();
    let mut out = Transcript::new();
    let mut impulses = ScriptedImpulses::default();
    let mut ctx = ActionContext::new(&mut out, &mut impulses);

    keeper.wake(&mut zoo, &mut ctx);

    assert_eq!(
        out.lines(),
        [
            "The zookeeper is waking the animals.",
            "Dave the Dragonfly wakes up.",
            "Chuck the Cat wakes up.",
        ]
    );
}

#[test]
fn feed_is_not_random_even_for_cats() {
    for impulse in Impulse::ALL {
        let mut zoo = dave_and_chuck();
        let mut keeper = Zookeeper::new();
        let mut out = Transcript::new();
        let mut impulses = ScriptedImpulses::always(impulse);
        let mut ctx = ActionContext::new(&mut out, &mut impulses);

        keeper.wake(&mut zoo, &mut ctx);
        keeper.feed(&mut zoo, &mut ctx);

        assert_eq!(
            out.lines().get(3..),
            Some(
                &[
                    "The zookeeper is feeding the animals.".to_owned(),
                    "Dave the Dragonfly eats some mosquitoes.".to_owned(),
                    "Chuck the Cat eats some cat food.".to_owned(),
                ][..]
            )
        );
    }
}

#[test]
fn exercise_outcome_for_chuck_follows_impulse() {
    let expectations = [
        (Impulse::Nap, "Chuck the Cat goes to sleep.", false),
        (Impulse::Prowl, "Chuck the Cat runs around.", true),
        (Impulse::Vocalize, "Chuck the Cat hisses.", true),
    ];

    for (impulse, expected, still_awake) in expectations {
        let mut zoo = dave_and_chuck();
        let mut keeper = Zookeeper::new();
        let mut out = Transcript::new();
        let mut impulses = ScriptedImpulses::always(impulse);
        let mut ctx = ActionContext::new(&mut out, &mut impulses);

        keeper.wake(&mut zoo, &mut ctx);
        keeper.exercise(&mut zoo, &mut ctx);

        assert_eq!(out.lines().last().map(String::as_str), Some(expected));
        let chuck = zoo.iter().nth(1).unwrap();
        assert_eq!(chuck.is_awake(), still_awake);
    }
}

#[test]
fn announcer_hears_each_chore_label_once() {
    let mut zoo = dave_and_chuck();
    let mut keeper = Zookeeper::new();
    let handle = Announcer::subscribe(&mut keeper);

    let mut out = Transcript::new();
    let mut impulses = ScriptedImpulses::always(Impulse::Prowl);
    let mut ctx = ActionContext::new(&mut out, &mut impulses);

    let mut heard = Vec::new();
    for chore in Chore::ROUTINE {
        keeper.perform(chore, &mut zoo, &mut ctx);
        heard.push(handle.last_action().unwrap());
    }

    assert_eq!(
        heard,
        [
            "waking the animals.",
            "calling roll.",
            "feeding the animals.",
            "exercising the animals.",
            "shutting down the zoo.",
        ]
    );

    let announcements: Vec<_> = out
        .lines()
        .iter()
        .filter(|line| line.starts_with("This is the Zoo Announcer."))
        .collect();
    assert_eq!(announcements.len(), 5);
    assert_eq!(
        announcements.first().map(|line| line.as_str()),
        Some("This is the Zoo Announcer. The zookeeper will now be waking the animals.")
    );

    handle.dispose(&mut keeper).unwrap();
    assert_eq!(keeper.observer_count(), 0);
}

#[test]
fn removed_announcer_is_not_invoked() {
    let mut zoo = dave_and_chuck();
    let mut keeper = Zookeeper::new();
    let handle = Announcer::subscribe(&mut keeper);
    assert!(keeper.remove_observer(&handle.observer()));

    let mut out = Transcript::new();
    let mut impulses = ScriptedImpulses::default();
    let mut ctx = ActionContext::new(&mut out, &mut impulses);
    keeper.wake(&mut zoo, &mut ctx);

    assert_eq!(handle.last_action(), None);
    assert_eq!(
        out.lines().first().map(String::as_str),
        Some("The zookeeper is waking the animals.")
    );
}

#[test]
fn full_default_routine_has_one_line_per_animal_per_chore() {
    let config = ZooConfig::default();
    let mut zoo = configured_zoo(&config);
    let mut keeper = Zookeeper::new();
    let first = Announcer::subscribe(&mut keeper);
    let second = Announcer::subscribe(&mut keeper);

    let mut out = Transcript::new();
    let mut impulses = SeededImpulses::seeded(2024);
    let mut ctx = ActionContext::new(&mut out, &mut impulses);
    keeper.routine(&config.routine.chores, &mut zoo, &mut ctx);

    // Per chore: two announcements, the keeper line, fourteen animals.
    assert_eq!(out.len(), 5 * (2 + 1 + 14));
    assert_eq!(first.last_action().as_deref(), Some("shutting down the zoo."));
    assert_eq!(second.last_action().as_deref(), Some("shutting down the zoo."));

    // Non-felines always end the day asleep.
    assert!(
        zoo.iter()
            .filter(|animal| animal.family() != Family::Feline)
            .all(|animal| !animal.is_awake())
    );

    first.dispose(&mut keeper).unwrap();
    second.dispose(&mut keeper).unwrap();
    assert_eq!(keeper.observer_count(), 0);
}
