mod cross;
mod direction;
mod grid;
mod ray;

pub use cross::{count_crosses, has_cross_at, matching_diagonals};
pub use direction::Direction;
pub use grid::{Grid, MalformedInputError};
pub use ray::{count_rays_from, count_words};
