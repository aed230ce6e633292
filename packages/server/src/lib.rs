//! Real-time presence and wake-up relay.
//!
//! Tracks which users are online and which group "room" each belongs to,
//! and relays wake-up / status / buzz events to the currently connected
//! members of a group. All state is in memory; nothing survives a process
//! restart, and identity claims are trusted as supplied.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
