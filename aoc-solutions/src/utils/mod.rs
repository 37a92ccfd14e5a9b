//! Helpers shared between puzzle solutions

pub mod grid;
pub mod input;
pub mod math;
pub mod progress;
