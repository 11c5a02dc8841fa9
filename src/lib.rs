//! Nutrition Calculator (nutricalc) Library
//!
//! Recipe and daily nutrition calculations over a hosted REST backend, plus
//! lunar phase computation.

pub mod backend;
pub mod build_info;
pub mod config;
pub mod lunar;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod store;
pub mod tools;
