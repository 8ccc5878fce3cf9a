//! Field simulation engine for STARRAID.
//!
//! Owns the fixed entity pools, advances them each tick and projects
//! them into screen-space records for the renderer.

pub mod engine;
pub mod event_queue;
pub mod pools;
pub mod projection;
pub mod systems;

pub use engine::FieldEngine;
pub use pools::{BogeyBehavior, BogeySpawn, NullBehavior};
pub use starraid_core as core;
