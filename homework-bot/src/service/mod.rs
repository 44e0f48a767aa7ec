//! Service layer
//!
//! Services hold the bot's business logic on top of the repositories.
//! Currently that is turning submission records into messages and
//! delivering them.

mod dispatch;

pub use dispatch::{DispatchReport, DispatchService, StandardDispatchService};
