//! Integer lattice points

use std::fmt;

use super::{Boundary, Direction, GridError, Polygon};

/// A point on the integer lattice
///
/// Points are plain values: every move returns a new point. Z is 0 for
/// puzzles on a flat grid. Ordering is lexicographic on (x, y, z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    /// A point on the Z = 0 plane
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }

    pub const fn new_3d(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The point one step away in `direction`
    pub fn step(self, direction: Direction) -> Point {
        let (dx, dy, dz) = direction.offset();
        Point::new_3d(self.x + dx, self.y + dy, self.z + dz)
    }

    pub fn north(self) -> Point {
        self.step(Direction::N)
    }

    pub fn south(self) -> Point {
        self.step(Direction::S)
    }

    pub fn east(self) -> Point {
        self.step(Direction::E)
    }

    pub fn west(self) -> Point {
        self.step(Direction::W)
    }

    pub fn up(self) -> Point {
        self.step(Direction::Up)
    }

    pub fn down(self) -> Point {
        self.step(Direction::Down)
    }

    /// Iterate the neighbours in the given directions, without bounds checks
    pub fn neighbors<'a>(
        self,
        directions: &'a [Direction],
    ) -> impl Iterator<Item = Point> + 'a {
        directions.iter().map(move |&dir| self.step(dir))
    }

    /// The cardinal direction leading from this point to `other`
    ///
    /// Only defined when the two points are orthogonal neighbours on the
    /// same Z level.
    ///
    /// ```
    /// use aoc_solutions::utils::grid::{Direction, Point};
    ///
    /// let a = Point::new(3, 3);
    /// assert_eq!(a.direction_to(Point::new(3, 2)).unwrap(), Direction::N);
    /// assert!(a.direction_to(Point::new(4, 4)).is_err());
    /// ```
    pub fn direction_to(self, other: Point) -> Result<Direction, GridError> {
        let not_a_neighbor = GridError::NotANeighbor {
            from: self,
            to: other,
        };
        if self.z != other.z || self.manhattan_distance(other) != 1 {
            return Err(not_a_neighbor);
        }

        match (other.x - self.x, other.y - self.y) {
            (0, -1) => Ok(Direction::N),
            (0, 1) => Ok(Direction::S),
            (1, 0) => Ok(Direction::E),
            (-1, 0) => Ok(Direction::W),
            _ => Err(not_a_neighbor),
        }
    }

    pub fn is_within(self, boundary: &Boundary) -> bool {
        boundary.contains(self)
    }

    pub fn manhattan_distance(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }

    pub fn euclidean_distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        let dz = f64::from(self.z) - f64::from(other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// True when `other` is one of the up to 26 surrounding points
    pub fn is_adjacent_to(self, other: Point) -> bool {
        self != other
            && self.x.abs_diff(other.x) <= 1
            && self.y.abs_diff(other.y) <= 1
            && self.z.abs_diff(other.z) <= 1
    }

    /// Whether the polygon encloses this point, see [`Polygon::surrounds`]
    pub fn is_surrounded_by(self, polygon: &Polygon) -> Result<bool, GridError> {
        polygon.surrounds(self)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.z == 0 {
            write!(f, "({}, {})", self.x, self.y)
        } else {
            write!(f, "({}, {}, {})", self.x, self.y, self.z)
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl From<(i32, i32, i32)> for Point {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Point::new_3d(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn small_point() -> impl Strategy<Value = Point> {
        (-1000..1000i32, -1000..1000i32, -10..10i32).prop_map(Point::from)
    }

    #[test]
    fn test_named_steps() {
        let p = Point::new(5, 5);
        assert_eq!(p.north(), Point::new(5, 4));
        assert_eq!(p.south(), Point::new(5, 6));
        assert_eq!(p.east(), Point::new(6, 5));
        assert_eq!(p.west(), Point::new(4, 5));
        assert_eq!(p.up(), Point::new_3d(5, 5, 1));
        assert_eq!(p.down(), Point::new_3d(5, 5, -1));
    }

    #[test]
    fn test_diagonal_composes_two_steps() {
        let p = Point::new(0, 0);
        assert_eq!(p.step(Direction::NE), p.north().east());
        assert_eq!(p.step(Direction::SE), p.south().east());
        assert_eq!(p.step(Direction::SW), p.south().west());
        assert_eq!(p.step(Direction::NW), p.north().west());
    }

    #[test]
    fn test_direction_to_rejects_non_neighbors() {
        let p = Point::new(2, 2);
        assert!(p.direction_to(p).is_err());
        assert!(p.direction_to(Point::new(3, 3)).is_err());
        assert!(p.direction_to(Point::new(4, 2)).is_err());
        assert_eq!(
            p.direction_to(Point::new_3d(2, 2, 1)),
            Err(GridError::NotANeighbor {
                from: p,
                to: Point::new_3d(2, 2, 1)
            })
        );
    }

    #[test]
    fn test_distances() {
        let a = Point::new_3d(1, 2, 3);
        let b = Point::new_3d(4, -2, 3);
        assert_eq!(a.manhattan_distance(b), 7);
        assert!((a.euclidean_distance(b) - 5.0).abs() < 1e-9);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_adjacency() {
        let p = Point::new(0, 0);
        assert!(!p.is_adjacent_to(p));
        assert!(p.is_adjacent_to(Point::new(1, 1)));
        assert!(p.is_adjacent_to(Point::new_3d(-1, 0, 1)));
        assert!(!p.is_adjacent_to(Point::new(2, 0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1, -2).to_string(), "(1, -2)");
        assert_eq!(Point::new_3d(1, 2, 3).to_string(), "(1, 2, 3)");
    }

    proptest! {
        #[test]
        fn prop_step_then_opposite_returns(p in small_point(), i in 0..4usize) {
            let dir = Direction::CARDINAL[i];
            prop_assert_eq!(p.step(dir).step(dir.opposite()), p);
        }

        #[test]
        fn prop_direction_to_neighbor_steps_back(p in small_point(), i in 0..4usize) {
            let neighbor = p.step(Direction::CARDINAL[i]);
            let dir = p.direction_to(neighbor).unwrap();
            prop_assert_eq!(dir, Direction::CARDINAL[i]);
            prop_assert_eq!(p.step(dir), neighbor);
        }

        #[test]
        fn prop_manhattan_is_symmetric(a in small_point(), b in small_point()) {
            prop_assert_eq!(a.manhattan_distance(b), b.manhattan_distance(a));
            prop_assert!(a.euclidean_distance(b) <= f64::from(a.manhattan_distance(b)) + 1e-9);
        }
    }
}
