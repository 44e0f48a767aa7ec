//! Scheduler layer for the bot
//!
//! This layer owns the polling cursor and drives the fetch, dispatch and
//! sleep cycle, recovering from failed cycles instead of stopping.

pub mod poller;

pub use poller::StatusPoller;
