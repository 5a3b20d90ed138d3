//! Topic-based event bus for runtime events.
//!
//! Committed game events go to [`Topic::Notifications`]; refused requests go
//! to [`Topic::Rejections`]. Consumers subscribe only to what they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{Notification, Rejection};
