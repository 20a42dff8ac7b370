//! Core types & contracts: errors, request assembly, tool and RPC surfaces.

pub mod error;
pub mod mcp;
pub mod query;
pub mod tool;
