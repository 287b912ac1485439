/// One of the eight compass directions a ray can be cast in.
///
/// Rows grow downward, so `North` steps to the row above.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Every direction, clockwise from `North`.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The unit `(row, column)` delta of this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The coordinate `steps` cells away from `(row, column)` in this direction,
    /// or `None` if it cannot be represented.
    pub fn step(self, (row, column): (isize, isize), steps: isize) -> Option<(isize, isize)> {
        let (delta_row, delta_column) = self.delta();
        let row = row.checked_add(delta_row.checked_mul(steps)?)?;
        let column = column.checked_add(delta_column.checked_mul(steps)?)?;
        Some((row, column))
    }
}
