//! Grid and geometry helpers shared by the puzzles
//!
//! - [`Point`], [`Direction`] and [`Boundary`] for lattice arithmetic
//! - [`Polygon`] for point-in-polygon tests on traced outlines
//! - [`shortest_path`] and [`shortest_path_with_cost`] for A* searches
//! - [`CharGrid`] for inputs that are a block of characters
//! - [`render_map`] for drawing points while debugging

mod boundary;
mod char_grid;
mod direction;
mod error;
mod pathfinding;
mod point;
mod polygon;
mod render;

pub use boundary::Boundary;
pub use char_grid::CharGrid;
pub use direction::Direction;
pub use error::GridError;
pub use pathfinding::{shortest_path, shortest_path_with_cost};
pub use point::Point;
pub use polygon::Polygon;
pub use render::{render_map, render_points};
