//! Zoo collection, zookeeper, and announcers for the zoo simulation.
//!
//! The [`Zookeeper`] is a publisher: every chore it performs first
//! broadcasts a new action-state to its registered [`Observer`]s, then
//! walks the [`Zoo`] applying the matching animal operation. An
//! [`Announcer`] is the stock observer.
//!
//! # Modules
//!
//! - [`announcer`] -- The zoo announcer and its registration handle
//! - [`config`] -- YAML configuration for the routine and roster
//! - [`error`] -- Error types for subscription management ([`ZooError`])
//! - [`keeper`] -- [`Observer`] / [`Subject`] traits and the [`Zookeeper`]
//! - [`zoo`] -- The ordered animal collection and its census

pub mod announcer;
pub mod config;
pub mod error;
pub mod keeper;
pub mod zoo;

pub use announcer::{Announcer, AnnouncerHandle};
pub use config::{ConfigError, RosterEntry, RoutineConfig, ZooConfig};
pub use error::ZooError;
pub use keeper::{Observer, SharedObserver, Subject, Zookeeper};
pub use zoo::{Census, Zoo};
