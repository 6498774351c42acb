//! Networking modules for the websocket greeting protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `socket_client` manages the websocket lifecycle and `types` defines the
//! shared wire schema.

pub mod socket_client;
pub mod types;
