//! Load controllers.
//!
//! [`ListLoadController`] fetches the catalogue once per start.
//! [`DetailLoadController`] fetches one satellite, publishes its view model,
//! and then hands off to a [`PositionPoller`] that runs until the cycle is
//! cancelled. Both are cheap to clone and publish through [`Signal`]s.
//!
//! [`Signal`]: crate::Signal

mod cycle;
mod detail;
mod list;
mod poller;

pub use detail::{DetailLoadController, DetailState};
pub use list::{ListLoadController, ListState};
pub use poller::PositionPoller;
