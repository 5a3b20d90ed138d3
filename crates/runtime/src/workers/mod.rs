//! Worker tasks that back the runtime orchestration.
//!
//! A single simulation worker owns the authoritative state, which gives every
//! request a place in one global total order.

mod simulation;

pub use simulation::{Command, SimulationWorker};
