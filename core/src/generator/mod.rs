use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine positions, the only collaborator the engine consumes.
///
/// Implementations return `count` distinct linear indices in `0..total`, none of them equal to
/// `exclude`. [`Board::place_mines`] rejects anything else before touching the board.
pub trait MineSampler {
    fn sample(&mut self, total: usize, exclude: usize, count: usize) -> Vec<usize>;
}
