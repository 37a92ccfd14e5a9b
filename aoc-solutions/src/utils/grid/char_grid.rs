//! Puzzle inputs that are a block of characters

use std::collections::HashMap;

use itertools::iproduct;

use super::{Boundary, GridError, Point};

/// A rectangular map of characters keyed by position
///
/// Row `y` of the input holds the points `(0, y)..(width - 1, y)`, so the
/// top-left character is at the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    cells: HashMap<Point, char>,
    boundary: Boundary,
    width: usize,
    height: usize,
}

impl CharGrid {
    /// Build a grid from the lines of `input`
    ///
    /// Trailing newlines are ignored. Every row must have the same number
    /// of characters.
    ///
    /// ```
    /// use aoc_solutions::utils::grid::{CharGrid, Point};
    ///
    /// let grid = CharGrid::parse("#.\n.#\n").unwrap();
    /// assert_eq!(grid.get(Point::new(1, 1)), Some('#'));
    /// assert_eq!(grid.get(Point::new(2, 1)), None);
    /// ```
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = input.trim_end_matches(['\n', '\r']).lines().collect();
        if rows.iter().all(|row| row.is_empty()) {
            return Ok(Self::default());
        }

        let width = rows[0].chars().count();
        let mut cells = HashMap::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y + 1,
                    expected: width,
                    found,
                });
            }
            for (x, c) in row.chars().enumerate() {
                cells.insert(Point::new(x as i32, y as i32), c);
            }
        }

        Ok(Self {
            cells,
            boundary: Boundary::new(0, 0, width as i32 - 1, rows.len() as i32 - 1),
            width,
            height: rows.len(),
        })
    }

    /// Bounds covering every cell of the grid
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, point: Point) -> Option<char> {
        self.cells.get(&point).copied()
    }

    /// Replace the character at `point`, returning the previous one
    ///
    /// Points outside the grid are left alone and yield `None`.
    pub fn set(&mut self, point: Point, c: char) -> Option<char> {
        self.cells.get_mut(&point).map(|cell| std::mem::replace(cell, c))
    }

    /// All cells in reading order, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        iproduct!(0..self.height, 0..self.width).filter_map(move |(y, x)| {
            let point = Point::new(x as i32, y as i32);
            self.get(point).map(|c| (point, c))
        })
    }

    /// Positions holding `c`, in reading order
    pub fn find(&self, c: char) -> impl Iterator<Item = Point> + '_ {
        self.iter()
            .filter_map(move |(point, cell)| (cell == c).then_some(point))
    }
}

impl Default for CharGrid {
    /// An empty grid that contains no points
    fn default() -> Self {
        Self {
            cells: HashMap::new(),
            boundary: Boundary::new(0, 0, -1, -1),
            width: 0,
            height: 0,
        }
    }
}
