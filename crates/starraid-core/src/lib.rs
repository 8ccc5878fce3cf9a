//! Core types and definitions for the STARRAID field simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! locations, slots and view modes, commands, events, render frames,
//! configuration and tuning constants. It does no simulation itself; its
//! only runtime dependencies are serde, glam, toml and thiserror.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
