//! Axis-aligned bounding boxes with optional limits

use itertools::{Itertools, MinMaxResult};

use super::{Direction, Point};

/// An inclusive box on the lattice
///
/// Every limit is optional and an unset limit never rejects a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Boundary {
    pub min_x: Option<i32>,
    pub max_x: Option<i32>,
    pub min_y: Option<i32>,
    pub max_y: Option<i32>,
    pub min_z: Option<i32>,
    pub max_z: Option<i32>,
}

impl Boundary {
    /// A box on the X/Y plane with no Z limits
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x: Some(min_x),
            max_x: Some(max_x),
            min_y: Some(min_y),
            max_y: Some(max_y),
            min_z: None,
            max_z: None,
        }
    }

    pub const fn unbounded() -> Self {
        Self {
            min_x: None,
            max_x: None,
            min_y: None,
            max_y: None,
            min_z: None,
            max_z: None,
        }
    }

    /// Copy of this box limited to `min_z..=max_z`
    pub const fn with_z(self, min_z: i32, max_z: i32) -> Self {
        Self {
            min_z: Some(min_z),
            max_z: Some(max_z),
            ..self
        }
    }

    /// Tight box around the X/Y extent of `points`, `None` when empty
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let points: Vec<Point> = points.into_iter().collect();
        let (min_x, max_x) = min_max(points.iter().map(|p| p.x))?;
        let (min_y, max_y) = min_max(points.iter().map(|p| p.y))?;
        Some(Self::new(min_x, min_y, max_x, max_y))
    }

    /// Grow every set limit outward by `by`
    pub fn expanded(self, by: i32) -> Self {
        Self {
            min_x: self.min_x.map(|v| v - by),
            max_x: self.max_x.map(|v| v + by),
            min_y: self.min_y.map(|v| v - by),
            max_y: self.max_y.map(|v| v + by),
            min_z: self.min_z.map(|v| v - by),
            max_z: self.max_z.map(|v| v + by),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        within(point.x, self.min_x, self.max_x)
            && within(point.y, self.min_y, self.max_y)
            && within(point.z, self.min_z, self.max_z)
    }

    /// The neighbour of `point` in `direction`, if it lies inside this box
    pub fn step(&self, point: Point, direction: Direction) -> Option<Point> {
        let next = point.step(direction);
        self.contains(next).then_some(next)
    }

    /// Neighbours of `point` in the given directions that lie inside this box
    pub fn neighbors<'a>(
        &'a self,
        point: Point,
        directions: &'a [Direction],
    ) -> impl Iterator<Item = Point> + 'a {
        directions
            .iter()
            .filter_map(move |&dir| self.step(point, dir))
    }
}

fn within(value: i32, min: Option<i32>, max: Option<i32>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

fn min_max(values: impl Iterator<Item = i32>) -> Option<(i32, i32)> {
    match values.minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}
