//! Data Transfer Objects for the external APIs
//!
//! Lightweight representations of the JSON exchanged with the review API
//! and the Telegram Bot API.

pub mod statuses;
pub mod telegram;
