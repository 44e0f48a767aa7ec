//! Repository layer
//!
//! Repositories are thin adapters over the HTTP clients. They give the
//! scheduler and services narrow, trait-based seams to the review API and to
//! Telegram, so both can be replaced with in-memory fakes in tests.

mod messages;
mod statuses;

// Re-export traits
pub use messages::MessageRepository;
pub use statuses::StatusRepository;

// Re-export implementations
pub use messages::TelegramMessageRepository;
pub use statuses::HttpStatusRepository;
