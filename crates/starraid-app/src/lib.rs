//! STARRAID headless driver.
//!
//! Runs the field engine on a fixed-interval game loop thread, forwards
//! commands to it over a channel and publishes the latest frame.

pub mod behaviors;
pub mod game_loop;
pub mod state;

pub use starraid_core as core;
