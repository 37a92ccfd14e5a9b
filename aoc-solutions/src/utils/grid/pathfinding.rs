//! A* shortest paths on the grid

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::{Boundary, Direction, Point};

/// Shortest 4-directional path from `start` to `goal` where every step costs 1
///
/// See [`shortest_path_with_cost`].
pub fn shortest_path(
    start: Point,
    goal: Point,
    boundary: &Boundary,
    obstacles: &HashSet<Point>,
) -> Vec<Point> {
    shortest_path_with_cost(start, goal, boundary, obstacles, |_, _, _| 1)
}

/// Cheapest 4-directional path from `start` to `goal`
///
/// Moves stay inside `boundary` and never enter an obstacle. `cost` is
/// called as `cost(previous, current, next)` where `previous` is the point
/// the search reached `current` from, `None` at the start. Manhattan
/// distance is used as the heuristic, so step costs should be at least 1
/// for the result to be optimal.
///
/// Returns the points from `start` to `goal` inclusive, or an empty vector
/// when the goal cannot be reached. Among equally good candidates the
/// search expands the one with the smaller X, then the smaller Y, so the
/// same input always produces the same path.
///
/// ```
/// use std::collections::HashSet;
/// use aoc_solutions::utils::grid::{shortest_path, Boundary, Point};
///
/// let walls: HashSet<Point> = [(1, 0), (1, 1)].into_iter().map(Point::from).collect();
/// let path = shortest_path(Point::new(0, 0), Point::new(2, 0), &Boundary::new(0, 0, 2, 2), &walls);
///
/// assert_eq!(path.len(), 7);
/// assert_eq!(path.first(), Some(&Point::new(0, 0)));
/// assert_eq!(path.last(), Some(&Point::new(2, 0)));
/// ```
pub fn shortest_path_with_cost<F>(
    start: Point,
    goal: Point,
    boundary: &Boundary,
    obstacles: &HashSet<Point>,
    mut cost: F,
) -> Vec<Point>
where
    F: FnMut(Option<Point>, Point, Point) -> u32,
{
    let heuristic = |p: Point| u64::from(p.manhattan_distance(goal));

    let mut best: HashMap<Point, u64> = HashMap::from([(start, 0)]);
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    // Min-heap on (estimated total, point), point order breaks ties on x then y
    let mut frontier = BinaryHeap::from([Reverse((heuristic(start), start))]);

    while let Some(Reverse((estimate, current))) = frontier.pop() {
        let Some(&current_cost) = best.get(&current) else {
            continue;
        };
        if estimate > current_cost + heuristic(current) {
            // Superseded by a cheaper route pushed later
            continue;
        }
        if current == goal {
            return reconstruct(&came_from, current);
        }

        let previous = came_from.get(&current).copied();
        for next in boundary.neighbors(current, &Direction::CARDINAL) {
            if obstacles.contains(&next) {
                continue;
            }
            let tentative = current_cost + u64::from(cost(previous, current, next));
            if best.get(&next).is_some_and(|&known| tentative >= known) {
                continue;
            }

            best.insert(next, tentative);
            came_from.insert(next, current);
            frontier.push(Reverse((tentative + heuristic(next), next)));
        }
    }

    Vec::new()
}

fn reconstruct(came_from: &HashMap<Point, Point>, goal: Point) -> Vec<Point> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = came_from.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
