//! Shared utilities for Lobby.
//!
//! Logging setup and the clock abstraction used by the server crate.

pub mod logger;
pub mod time;
