//! Homework Core
//!
//! Core types shared by the homework status bot.
//!
//! This crate contains:
//! - Domain types: submissions, the polling cursor and review verdicts
//! - DTOs: wire formats of the review API and the Telegram Bot API

pub mod domain;
pub mod dto;
