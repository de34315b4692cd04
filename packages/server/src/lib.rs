//! Lobby chat server library.
//!
//! This library provides a group chat backend with presence tracking:
//! participants join by name, keep themselves alive with heartbeats, and read
//! the messages that are visible to them.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
