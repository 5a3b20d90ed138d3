//! Async host for the boss raid.
//!
//! This crate wraps the deterministic rules of `raid-core` in a runtime that
//! serializes every request through one worker, persists committed states,
//! mirrors minted tokens into an ownership ledger and publishes notifications.
//! Consumers build a [`Runtime`] and talk to it through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`repository`] persists committed states
//! - [`ledger`] tracks token ownership
//! - [`workers`] keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod ledger;
pub mod repository;
pub mod runtime;
pub mod utils;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, Notification, Rejection, Topic};
pub use ledger::{InMemoryTokenLedger, LedgerError, TokenLedger};
pub use repository::{FileStateRepository, InMemoryStateRepo, RepositoryError, StateRepository};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
