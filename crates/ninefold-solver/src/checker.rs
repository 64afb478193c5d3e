//! The constraint checker: legality of a single placement.

use ninefold_core::{Digit, DigitGrid, House, Position};

/// Returns `true` if placing `digit` at `pos` is consistent with the rest of
/// the grid.
///
/// The check scans the three houses containing `pos` (its row, column, and
/// 3×3 box) for another cell already holding `digit`. The cell at `pos`
/// itself is excluded from the comparison, so a digit validates against a
/// cell that already holds it; this makes the whole-grid form
/// [`grid_is_valid`] a plain conjunction of per-cell checks.
///
/// The checker never mutates the grid and has no failure mode: a rejected
/// candidate is an ordinary `false`, not an error. Out-of-range inputs are
/// unrepresentable, since [`Digit`] and [`Position`] are bounds-checked at
/// construction.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitGrid, Position};
/// use ninefold_solver::is_valid;
///
/// let mut grid = DigitGrid::new();
/// grid[Position::new(0, 0)] = Some(Digit::D5);
///
/// // Rejected: 5 already occurs in row 0, column 0, and box 0.
/// assert!(!is_valid(&grid, Digit::D5, Position::new(4, 0)));
/// assert!(!is_valid(&grid, Digit::D5, Position::new(0, 4)));
/// assert!(!is_valid(&grid, Digit::D5, Position::new(1, 1)));
///
/// // Accepted: no conflict, including re-validating the cell itself.
/// assert!(is_valid(&grid, Digit::D5, Position::new(4, 4)));
/// assert!(is_valid(&grid, Digit::D5, Position::new(0, 0)));
/// ```
#[must_use]
pub fn is_valid(grid: &DigitGrid, digit: Digit, pos: Position) -> bool {
    House::containing(pos)
        .into_iter()
        .flat_map(House::positions)
        .all(|peer| peer == pos || grid[peer] != Some(digit))
}

/// Returns `true` if every filled cell of `grid` is consistent with its
/// peers.
///
/// Empty cells are ignored, so a partially filled grid without conflicts is
/// valid. A fully filled valid grid is a solution.
#[must_use]
pub fn grid_is_valid(grid: &DigitGrid) -> bool {
    Position::ALL
        .into_iter()
        .all(|pos| grid[pos].is_none_or(|digit| is_valid(grid, digit, pos)))
}
