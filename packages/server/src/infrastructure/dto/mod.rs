//! Data Transfer Objects (DTOs) for the presence relay.
//!
//! DTOs are organized by protocol:
//! - `websocket`: WebSocket message DTOs (inbound events, outbound events)
//! - `http`: HTTP API response DTOs

pub mod http;
pub mod websocket;
