//! Word search along straight rays.

use crate::{direction::Direction, grid::Grid};

/// Count the directions in which `word` can be read starting at `(row, column)`.
///
/// Cells beyond the edge of the grid never match, so a ray which runs off the
/// grid is simply not counted. An empty word matches nothing.
pub fn count_rays_from(grid: &Grid, row: isize, column: isize, word: &str) -> usize {
    let Some(first) = word.chars().next() else {
        return 0;
    };
    if grid.at(row, column) != Some(first) {
        return 0;
    }

    Direction::ALL
        .into_iter()
        .filter(|&direction| {
            (0..).zip(word.chars()).all(|(steps, ch)| {
                direction
                    .step((row, column), steps)
                    .and_then(|(row, column)| grid.at(row, column))
                    == Some(ch)
            })
        })
        .count()
}

/// Count every occurrence of `word` in the grid, in any of the eight directions.
#[tracing::instrument(skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn count_words(grid: &Grid, word: &str) -> usize {
    let count: usize = grid
        .coordinates()
        .map(|(row, column)| count_rays_from(grid, row, column, word))
        .sum();
    tracing::debug!(count, "ray scan complete");
    count
}
