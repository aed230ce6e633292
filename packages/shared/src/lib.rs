//! Shared utilities for the mezame presence relay.
//!
//! Cross-cutting concerns used by the server crate: logging setup and
//! time handling.

pub mod logger;
pub mod time;
