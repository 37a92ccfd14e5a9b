//! Text rendering of points on a map, handy when debugging a puzzle

use std::collections::HashMap;

use super::{Boundary, Point};

/// Draw `marks` on a map spanning `0..=max_x` by `0..=max_y`
///
/// Positions without a mark are filled with `blank`. When a limit of the
/// boundary is unset, the largest marked coordinate is used instead. With
/// `border` set the map is framed by `=` rows and `|` columns.
///
/// ```
/// use aoc_solutions::utils::grid::{render_map, Boundary, Point};
///
/// let map = render_map(&Boundary::new(0, 0, 2, 1), [(Point::new(1, 0), '#')], '.', false);
/// assert_eq!(map, ".#.\n...\n");
/// ```
pub fn render_map<I>(boundary: &Boundary, marks: I, blank: char, border: bool) -> String
where
    I: IntoIterator<Item = (Point, char)>,
{
    let marks: HashMap<Point, char> = marks.into_iter().collect();
    let max_x = boundary
        .max_x
        .or_else(|| marks.keys().map(|p| p.x).max())
        .unwrap_or(0);
    let max_y = boundary
        .max_y
        .or_else(|| marks.keys().map(|p| p.y).max())
        .unwrap_or(0);

    let frame = "=".repeat((max_x.max(-1) + 5) as usize);
    let mut out = String::new();
    if border {
        out.push_str(&frame);
        out.push('\n');
    }
    for y in 0..=max_y {
        if border {
            out.push_str("| ");
        }
        out.extend((0..=max_x).map(|x| marks.get(&Point::new(x, y)).copied().unwrap_or(blank)));
        if border {
            out.push_str(" |");
        }
        out.push('\n');
    }
    if border {
        out.push_str(&frame);
        out.push('\n');
    }
    out
}

/// Draw every point in `points` with the same character
pub fn render_points<I>(boundary: &Boundary, points: I, mark: char, blank: char, border: bool) -> String
where
    I: IntoIterator<Item = Point>,
{
    render_map(boundary, points.into_iter().map(|p| (p, mark)), blank, border)
}
