//! Core domain types
//!
//! These types describe what the bot knows about a submission and how a
//! review status is turned into a message. They are shared between the HTTP
//! client (which produces them) and the bot (which consumes them).

pub mod cursor;
pub mod homework;
pub mod verdict;
