//! Foundation types for TERMFOLIO.
//!
//! This crate contains the presentation-agnostic types shared by all
//! TERMFOLIO crates: error types, configuration, input events, and the
//! read-only content table consumed by the command handlers.

pub mod config;
pub mod content;
pub mod error;
pub mod input;
