use std::{ops::Index, str::FromStr};

/// An immutable rectangular block of characters.
///
/// For indexing operations on this grid, `(0, 0)` is the top left corner and
/// coordinates are given as `(row, column)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    // row-major, no separators
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from a block of text.
    ///
    /// Leading and trailing blank lines, including lines holding only whitespace,
    /// are ignored; every remaining line becomes one row, spaces and all. All rows
    /// must have the same number of characters as the first.
    pub fn from_text(text: &str) -> Result<Self, MalformedInputError> {
        let is_blank = |line: &&str| line.trim().is_empty();
        let mut lines: Vec<&str> = text.lines().skip_while(is_blank).collect();
        while lines.last().is_some_and(is_blank) {
            lines.pop();
        }

        let Some((first, rest)) = lines.split_first() else {
            return Err(MalformedInputError::NoRows);
        };
        let mut cells: Vec<char> = first.chars().collect();
        let width = cells.len();
        let mut height = 1;

        for (row, line) in (1..).zip(rest) {
            let before = cells.len();
            cells.extend(line.chars());
            let found = cells.len() - before;
            if found != width {
                return Err(MalformedInputError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        tracing::trace!(width, height, "constructed grid");
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the internal index where the desired character is stored,
    /// or `None` if it is out of bounds.
    fn idx(&self, row: isize, column: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        (row < self.height && column < self.width).then(|| (row * self.width) + column)
    }

    /// The character at `(row, column)`, or `None` if that lies outside the grid.
    pub fn at(&self, row: isize, column: isize) -> Option<char> {
        self.idx(row, column).map(|idx| self.cells[idx])
    }

    /// Iterate over every in-bounds coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = (isize, isize)> {
        let width = self.width as isize;
        (0..self.height as isize).flat_map(move |row| (0..width).map(move |column| (row, column)))
    }
}

impl FromStr for Grid {
    type Err = MalformedInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = char;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.height && column < self.width,
            "the point `({row}, {column})` is out of bounds. max: `({}, {})`",
            self.height,
            self.width,
        );
        &self.cells[(row * self.width) + column]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedInputError {
    #[error("input contains no rows")]
    NoRows,
    #[error("row {row} has {found} characters but the grid is {expected} wide")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const BLOCK: &str = "abcd\nefgh\nijkl";

    #[test]
    fn dimensions() {
        let grid = Grid::from_text(BLOCK).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
    }

    #[test]
    fn lookup_agrees_with_rows() {
        let grid = Grid::from_text(BLOCK).unwrap();
        for (row, line) in BLOCK.lines().enumerate() {
            for (column, ch) in line.chars().enumerate() {
                assert_eq!(grid.at(row as isize, column as isize), Some(ch));
                assert_eq!(grid[(row, column)], ch);
            }
        }
    }

    #[rstest]
    #[case(-1, 0)]
    #[case(0, -1)]
    #[case(3, 0)]
    #[case(0, 4)]
    #[case(3, 4)]
    #[case(isize::MIN, isize::MAX)]
    #[case(isize::MAX, 0)]
    #[case(0, isize::MAX)]
    #[case(isize::MAX, isize::MAX)]
    fn out_of_bounds_is_none(#[case] row: isize, #[case] column: isize) {
        let grid = Grid::from_text(BLOCK).unwrap();
        assert_eq!(grid.at(row, column), None);
    }

    #[test]
    fn last_row_and_column_are_inclusive_limits() {
        let grid = Grid::from_text(BLOCK).unwrap();
        assert_eq!(grid.at(2, 3), Some('l'));
        // one past the end must not wrap into the next row or run off the buffer
        assert_eq!(grid.at(2, 4), None);
        assert_eq!(grid.at(1, 4), None);
    }

    #[rstest]
    #[case("\n\nab\ncd\n\n")]
    #[case("ab\r\ncd\r\n")]
    #[case("ab\ncd")]
    #[case("ab\ncd\n  \n")]
    #[case("ab\ncd\n   \n")]
    #[case(" \t\n\nab\ncd\n \r\n")]
    fn surrounding_blank_lines_are_trimmed(#[case] text: &str) {
        let grid: Grid = text.parse().unwrap();
        assert_eq!((grid.height(), grid.width()), (2, 2));
        assert_eq!(grid.at(1, 1), Some('d'));
    }

    #[rstest]
    #[case("")]
    #[case("\n\n")]
    #[case("\r\n")]
    #[case("  \n\t\n ")]
    fn empty_input_is_rejected(#[case] text: &str) {
        assert_eq!(Grid::from_text(text), Err(MalformedInputError::NoRows));
    }

    #[rstest]
    #[case("abc\nab", 1, 2)]
    #[case("abc\nabc\nabcd", 2, 4)]
    #[case("abc\n\nabc", 1, 0)]
    fn ragged_rows_are_rejected(#[case] text: &str, #[case] row: usize, #[case] found: usize) {
        assert_eq!(
            Grid::from_text(text),
            Err(MalformedInputError::RaggedRow {
                row,
                expected: 3,
                found
            })
        );
    }

    #[test]
    fn spaces_inside_rows_are_kept() {
        let grid = Grid::from_text("\n a \nb c\n  d\n\n").unwrap();
        assert_eq!((grid.height(), grid.width()), (3, 3));
        assert_eq!(grid.at(0, 0), Some(' '));
        assert_eq!(grid.at(0, 2), Some(' '));
        assert_eq!(grid.at(2, 2), Some('d'));
    }

    #[test]
    fn coordinates_are_row_major() {
        let grid = Grid::from_text("ab\ncd").unwrap();
        let visited: String = grid
            .coordinates()
            .filter_map(|(row, column)| grid.at(row, column))
            .collect();
        assert_eq!(visited, "abcd");
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let grid = Grid::from_text(BLOCK).unwrap();
        let _ch: char = grid[(0, 4)];
    }
}
