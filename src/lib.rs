//! MCP gateway for the Clash Royale REST API.
//!
//! Exposes the upstream endpoints as named tools over the MCP streamable
//! HTTP / stdio transports. One static endpoint table drives request
//! assembly, validation, schema generation and tool registration; the client
//! relays upstream JSON bodies verbatim.

pub mod api;
pub mod cli;
pub mod clients;
pub mod core;
pub mod infra;
pub mod tools;
