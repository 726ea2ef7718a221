//! Compte est bon - A solver for the French numbers game
//!
//! Six tiles are drawn from a fixed set and a target between 100 and 999 is
//! picked. This library finds every way of combining the tiles with
//! `+ - x /`, each tile used at most once, that reaches the target, or the
//! closest value to it when the target cannot be reached.

pub mod draw;
pub mod expression;
pub mod solver;
pub mod tile;

// Re-export the main public API
pub use draw::{Draw, DrawError, DrawReport, Status, validate_draw};
pub use expression::{ExpressionError, Item, Operation, Operator, evaluate};
pub use solver::{SearchOutcome, SearchStats, Solver, SolverError, solve_all};
pub use tile::{Tile, TileError};

/// Build a draw from explicit tiles and target and resolve it
///
/// This is a convenience function for one-shot solving. An illegal draw
/// (wrong target range, wrong tile count, too many copies of a tile) is
/// returned with [`Status::Invalid`] and no solutions.
///
/// # Errors
///
/// This function will return an error if one of the values is not a tile of
/// the game at all.
///
/// # Examples
///
/// ```
/// use compte_est_bon::{Status, solve};
///
/// let draw = solve(&[25, 4, 1, 1, 2, 2], 100).unwrap();
/// assert_eq!(draw.status(), Status::ExactMatch);
/// if let Some(best) = draw.solution() {
///     println!("Found: {}", best);
/// }
/// ```
pub fn solve(tiles: &[i64], target: i64) -> Result<Draw, SolverError> {
    let mut draw = Draw::new(tiles, target)?;
    draw.resolve();
    Ok(draw)
}
