//! Repository layer for committed game states.
//!
//! States are saved per nonce so a save directory doubles as a history of the
//! raid. Token ownership is mirrored separately by [`crate::ledger`].

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::InMemoryStateRepo;
pub use traits::StateRepository;
