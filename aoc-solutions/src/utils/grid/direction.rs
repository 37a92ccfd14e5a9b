//! Compass and vertical directions

use super::GridError;

/// One step on the grid
///
/// X grows to the east, Y grows to the south and Z grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    Up,
    Down,
}

impl Direction {
    /// The four orthogonal directions on a single plane
    pub const CARDINAL: [Direction; 4] = [Direction::N, Direction::S, Direction::E, Direction::W];

    /// All eight compass directions
    pub const ALL_2D: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// The six orthogonal directions in space
    pub const ALL_3D: [Direction; 6] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::Up,
        Direction::Down,
    ];

    /// Offset applied by one step, as `(dx, dy, dz)`
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::N => (0, -1, 0),
            Direction::NE => (1, -1, 0),
            Direction::E => (1, 0, 0),
            Direction::SE => (1, 1, 0),
            Direction::S => (0, 1, 0),
            Direction::SW => (-1, 1, 0),
            Direction::W => (-1, 0, 0),
            Direction::NW => (-1, -1, 0),
            Direction::Up => (0, 0, 1),
            Direction::Down => (0, 0, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::NE => Direction::SW,
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::S => Direction::N,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Whether this is one of N, E, S or W
    pub fn is_cardinal(self) -> bool {
        matches!(self, Direction::N | Direction::E | Direction::S | Direction::W)
    }

    /// Rotate clockwise by a multiple of 90 degrees
    ///
    /// Only cardinal directions rotate, and only by 0, 90, 180 or 270 degrees.
    ///
    /// ```
    /// use aoc_solutions::utils::grid::Direction;
    ///
    /// assert_eq!(Direction::N.rotate(90).unwrap(), Direction::E);
    /// assert_eq!(Direction::W.rotate(180).unwrap(), Direction::E);
    /// assert!(Direction::NE.rotate(90).is_err());
    /// assert!(Direction::N.rotate(45).is_err());
    /// ```
    pub fn rotate(self, degrees: i32) -> Result<Direction, GridError> {
        if !self.is_cardinal() {
            return Err(GridError::NotRotatable(self));
        }
        let quarter_turns = match degrees {
            0 => 0,
            90 => 1,
            180 => 2,
            270 => 3,
            _ => return Err(GridError::InvalidRotation(degrees)),
        };

        Ok((0..quarter_turns).fold(self, |dir, _| dir.turn_right()))
    }

    fn turn_right(self) -> Direction {
        match self {
            Direction::N => Direction::E,
            Direction::E => Direction::S,
            Direction::S => Direction::W,
            Direction::W => Direction::N,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_sequence() {
        assert_eq!(Direction::N.rotate(90), Ok(Direction::E));
        assert_eq!(Direction::E.rotate(90), Ok(Direction::S));
        assert_eq!(Direction::S.rotate(90), Ok(Direction::W));
        assert_eq!(Direction::W.rotate(90), Ok(Direction::N));
        assert_eq!(Direction::S.rotate(270), Ok(Direction::E));
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        for dir in Direction::CARDINAL {
            assert_eq!(dir.rotate(0), Ok(dir));
        }
    }

    #[test]
    fn test_four_quarter_turns_return_to_start() {
        for dir in Direction::CARDINAL {
            let mut rotated = dir;
            for _ in 0..4 {
                rotated = rotated.rotate(90).unwrap();
            }
            assert_eq!(rotated, dir);
        }
    }

    #[test]
    fn test_invalid_rotations() {
        assert_eq!(
            Direction::Up.rotate(90),
            Err(GridError::NotRotatable(Direction::Up))
        );
        assert_eq!(
            Direction::SW.rotate(0),
            Err(GridError::NotRotatable(Direction::SW))
        );
        assert_eq!(
            Direction::N.rotate(360),
            Err(GridError::InvalidRotation(360))
        );
        assert_eq!(Direction::E.rotate(-90), Err(GridError::InvalidRotation(-90)));
    }

    #[test]
    fn test_opposite_cancels_offset() {
        for dir in Direction::ALL_2D.into_iter().chain(Direction::ALL_3D) {
            let (dx, dy, dz) = dir.offset();
            let (ox, oy, oz) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy, dz + oz), (0, 0, 0), "{:?}", dir);
        }
    }
}
