//! Constraint checking and backtracking search for ninefold puzzles.
//!
//! The crate has two components, mirroring the checker/engine split of the
//! solver design:
//!
//! 1. **Constraint checker** — [`is_valid`], a pure query answering "is
//!    placing this digit at this position consistent with the grid?", plus
//!    the whole-grid form [`grid_is_valid`].
//! 2. **Search engine** — [`BacktrackSolver`], a depth-first backtracking
//!    solver that mutates the caller's grid in place, with a bounded-effort
//!    circuit breaker for inputs that would otherwise search for a long
//!    time. The free function [`solve`] runs it with the default attempt
//!    limit.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, DigitGrid, Position};
//! use ninefold_solver::{is_valid, solve};
//!
//! let mut grid = DigitGrid::new();
//! grid[Position::new(0, 0)] = Some(Digit::D5);
//!
//! // 5 is taken in row 0, but 3 is fine.
//! assert!(!is_valid(&grid, Digit::D5, Position::new(4, 0)));
//! assert!(is_valid(&grid, Digit::D3, Position::new(4, 0)));
//!
//! // Complete the grid in place.
//! assert!(solve(&mut grid));
//! assert!(grid.is_filled());
//! ```

pub mod backtrack;
pub mod checker;

// Re-export the public surface
pub use self::{
    backtrack::{BacktrackSolver, DEFAULT_ATTEMPT_LIMIT, SearchStats, solve},
    checker::{grid_is_valid, is_valid},
};
