//! Detection of two three-letter words crossing diagonally on a shared center.

use crate::{direction::Direction, grid::Grid};

/// Split a word into exactly three letters, or `None` for any other length.
fn letters(word: &str) -> Option<[char; 3]> {
    let mut chars = word.chars();
    let letters = [chars.next()?, chars.next()?, chars.next()?];
    chars.next().is_none().then_some(letters)
}

/// Read the three cells from `from`, through `(row, column)`, to the opposite corner.
fn diagonal(grid: &Grid, row: isize, column: isize, from: Direction) -> [Option<char>; 3] {
    [1, 0, -1].map(|steps| {
        from.step((row, column), steps)
            .and_then(|(row, column)| grid.at(row, column))
    })
}

/// `true` when the diagonal spells the word forwards or backwards.
fn spells(diagonal: [Option<char>; 3], letters: [char; 3]) -> bool {
    let [a, b, c] = letters.map(Some);
    diagonal == [a, b, c] || diagonal == [c, b, a]
}

/// How many of the two diagonals through `(row, column)` spell `word`, in either
/// reading direction.
///
/// The leading diagonal runs from the top left to the bottom right; the counter
/// diagonal runs from the bottom left to the top right. A diagonal with a cell
/// outside the grid never matches. `word` must be exactly three letters long;
/// any other word matches nothing.
pub fn matching_diagonals(grid: &Grid, row: isize, column: isize, word: &str) -> usize {
    let Some(letters) = letters(word) else {
        return 0;
    };

    [Direction::NorthWest, Direction::SouthWest]
        .into_iter()
        .filter(|&from| spells(diagonal(grid, row, column, from), letters))
        .count()
}

/// `true` when both diagonals through `(row, column)` spell `word`.
pub fn has_cross_at(grid: &Grid, row: isize, column: isize, word: &str) -> bool {
    matching_diagonals(grid, row, column, word) == 2
}

/// Count every cell of the grid at which two copies of `word` cross.
#[tracing::instrument(skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn count_crosses(grid: &Grid, word: &str) -> usize {
    let count = grid
        .coordinates()
        .filter(|&(row, column)| has_cross_at(grid, row, column, word))
        .count();
    tracing::debug!(count, "cross scan complete");
    count
}
