//! Point-in-polygon tests on the lattice
//!
//! A polygon is given as every lattice cell on its closed outline, for
//! example the cells visited while following a loop in a puzzle map. The
//! test casts a ray westward from the query point and counts how often it
//! crosses the outline.

use std::collections::HashSet;

use super::{Boundary, GridError, Point};

/// Vertical side a horizontal stretch of outline connects to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    North,
    South,
}

/// The cells of a closed outline on the Z = 0 plane
#[derive(Debug, Clone)]
pub struct Polygon {
    cells: HashSet<Point>,
    bounds: Boundary,
}

impl Polygon {
    pub fn new<I>(points: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Point>,
    {
        let cells: HashSet<Point> = points.into_iter().collect();
        if cells.iter().any(|p| p.z != 0) {
            return Err(GridError::UnsupportedDimension("polygon outline"));
        }
        let bounds = Boundary::enclosing(cells.iter().copied())
            .ok_or(GridError::EmptyPolygon)?
            .expanded(1);

        Ok(Self { cells, bounds })
    }

    pub fn cells(&self) -> &HashSet<Point> {
        &self.cells
    }

    /// Bounding box of the outline grown by one cell on every side
    pub fn bounds(&self) -> Boundary {
        self.bounds
    }

    pub fn is_on_outline(&self, point: Point) -> bool {
        self.cells.contains(&point)
    }

    /// Whether `point` lies inside the outline or on it
    ///
    /// The ray walks west one cell at a time until it leaves [`Self::bounds`].
    /// A vertical piece of outline is one crossing. A horizontal run is one
    /// crossing only when its two ends turn to opposite sides, so the ray
    /// passes through a step and not along the top or bottom of a bump.
    ///
    /// ```
    /// use aoc_solutions::utils::grid::{Point, Polygon};
    ///
    /// let square = [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)];
    /// let polygon = Polygon::new(square.into_iter().map(Point::from)).unwrap();
    ///
    /// assert!(polygon.surrounds(Point::new(2, 2)).unwrap());
    /// assert!(polygon.surrounds(Point::new(1, 1)).unwrap());
    /// assert!(!polygon.surrounds(Point::new(4, 2)).unwrap());
    /// ```
    pub fn surrounds(&self, point: Point) -> Result<bool, GridError> {
        if point.z != 0 {
            return Err(GridError::UnsupportedDimension("point in polygon test"));
        }
        if !self.bounds.contains(point) {
            return Ok(false);
        }
        if self.is_on_outline(point) {
            return Ok(true);
        }

        let mut crossings = 0u32;
        let mut run_entry: Option<Option<Side>> = None;
        let mut current = point.west();

        while self.bounds.contains(current) {
            if !self.is_on_outline(current) {
                run_entry = None;
            } else if self.is_on_outline(current.north()) && self.is_on_outline(current.south()) {
                crossings += 1;
                run_entry = None;
            } else {
                let side = self.turn_at(current);
                let entry = *run_entry.get_or_insert(side);

                if !self.is_on_outline(current.west()) {
                    if let (Some(entry), Some(exit)) = (entry, side) {
                        if entry != exit {
                            crossings += 1;
                        }
                    }
                    run_entry = None;
                }
            }
            current = current.west();
        }

        Ok(crossings % 2 == 1)
    }

    fn turn_at(&self, cell: Point) -> Option<Side> {
        if self.is_on_outline(cell.north()) {
            Some(Side::North)
        } else if self.is_on_outline(cell.south()) {
            Some(Side::South)
        } else {
            None
        }
    }
}
