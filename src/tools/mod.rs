//! Tools module
//!
//! MCP tool implementations for nutricalc.

pub mod lunar;
pub mod nutrition;
pub mod status;
