//! Controller layer: host input translation and user actions against the engine.

pub mod actions;
pub mod events;
