//! Puzzle solutions, one module per day

pub mod template;
