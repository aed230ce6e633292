//! UI layer: the transport boundary (axum WebSocket + HTTP).
//!
//! No business logic lives here beyond dispatch: handlers translate
//! transport messages into use-case calls.

pub mod handler;
pub mod server;
pub mod signal;
pub mod state;

pub use server::Server;
pub use state::AppState;
