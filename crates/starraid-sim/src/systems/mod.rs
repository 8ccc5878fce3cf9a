//! Systems that operate on the entity pools each tick.
//!
//! Systems are plain functions over the pools they need. They do not own
//! state; everything lives in `FieldEngine`.

pub mod bogeys;
pub mod collision;
pub mod debris;
pub mod missiles;
pub mod motion;
pub mod render;
pub mod stars;
