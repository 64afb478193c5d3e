//! The search engine: depth-first backtracking over grid completions.

use ninefold_core::{Digit, DigitGrid};

use crate::checker::is_valid;

/// Default number of tentative placements after which a search is abandoned.
///
/// The limit is a heuristic circuit breaker, not an unsolvability proof: a
/// solvable puzzle that needs more attempts than this under the fixed
/// row-major scan and ascending candidate order is reported as unsolvable.
/// The threshold is search-order-dependent and makes no sufficiency
/// guarantee; use [`BacktrackSolver::with_attempt_limit`] where a different
/// trade-off between worst-case latency and completeness is wanted.
pub const DEFAULT_ATTEMPT_LIMIT: usize = 999;

/// Statistics collected during a single search.
///
/// # Examples
///
/// ```
/// use ninefold_core::DigitGrid;
/// use ninefold_solver::BacktrackSolver;
///
/// let mut grid = DigitGrid::new();
/// let (solved, stats) = BacktrackSolver::new().solve_with_stats(&mut grid);
/// assert!(solved);
/// assert!(stats.attempts() > 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    attempts: usize,
}

impl SearchStats {
    /// Returns the number of tentative placements the search made.
    ///
    /// Undone placements count; a solved grid that needed no placement
    /// reports zero.
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }
}

/// Outcome of one recursive descent.
///
/// Only `Solved` is visible to callers as `true`; the other two collapse to
/// `false`. They stay distinct internally because an abort must short-circuit
/// the candidate loop at every level, while exhaustion lets the parent try
/// its next candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchOutcome {
    /// Every cell is assigned; the grid is a solution.
    Solved,
    /// All candidates at some depth failed; the parent backtracks.
    Exhausted,
    /// The attempt budget ran out; unwind without trying further candidates.
    Aborted,
}

/// A depth-first backtracking solver for 9×9 grids.
///
/// The solver scans for the first empty cell in row-major order, tries the
/// digits 1-9 in ascending order, prunes with [`is_valid`], and recurses on
/// each legal placement, undoing it when the branch dead-ends. The grid is
/// mutated in place: on success it holds a solution; on failure every
/// provisional placement has been undone and the grid is exactly as the
/// caller supplied it.
///
/// Each call owns its attempt counter, so the solver is re-entrant and a
/// fresh budget applies to every puzzle.
///
/// # Examples
///
/// ```
/// use ninefold_core::DigitGrid;
/// use ninefold_solver::BacktrackSolver;
///
/// let mut grid: DigitGrid = "
///     53_ 678 912
///     672 19_ 348
///     _98 342 567
///     859 761 423
///     426 8_3 791
///     713 924 856
///     961 537 2_4
///     287 419 635
///     345 286 17_
/// "
/// .parse()?;
///
/// let solver = BacktrackSolver::new();
/// assert!(solver.solve(&mut grid));
/// assert!(grid.is_filled());
/// # Ok::<(), ninefold_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BacktrackSolver {
    attempt_limit: usize,
}

impl Default for BacktrackSolver {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl BacktrackSolver {
    /// Creates a solver with the default attempt limit
    /// ([`DEFAULT_ATTEMPT_LIMIT`]).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
        }
    }

    /// Creates a solver that abandons the search after `attempt_limit`
    /// tentative placements.
    ///
    /// A limit of zero aborts on the first tentative placement, so only an
    /// already-solved grid can succeed.
    #[must_use]
    pub const fn with_attempt_limit(attempt_limit: usize) -> Self {
        Self { attempt_limit }
    }

    /// Returns the configured attempt limit.
    #[must_use]
    pub const fn attempt_limit(&self) -> usize {
        self.attempt_limit
    }

    /// Solves `grid` in place.
    ///
    /// Returns `true` if a completion was found; `grid` then holds it.
    /// Returns `false` if the search space was exhausted or the attempt
    /// limit was hit; the two cases are deliberately indistinguishable here,
    /// and `grid` is left exactly as supplied.
    pub fn solve(&self, grid: &mut DigitGrid) -> bool {
        self.solve_with_stats(grid).0
    }

    /// Solves `grid` in place, also returning search statistics.
    ///
    /// The verdict is identical to [`BacktrackSolver::solve`]; the stats
    /// report how many tentative placements were made.
    pub fn solve_with_stats(&self, grid: &mut DigitGrid) -> (bool, SearchStats) {
        let mut stats = SearchStats::default();
        let outcome = self.search(grid, &mut stats);
        (outcome == SearchOutcome::Solved, stats)
    }

    fn search(&self, grid: &mut DigitGrid, stats: &mut SearchStats) -> SearchOutcome {
        let Some(pos) = grid.first_empty() else {
            return SearchOutcome::Solved;
        };
        for digit in Digit::ALL {
            if !is_valid(grid, digit, pos) {
                continue;
            }
            grid[pos] = Some(digit);
            stats.attempts += 1;
            if stats.attempts >= self.attempt_limit {
                grid[pos] = None;
                return SearchOutcome::Aborted;
            }
            match self.search(grid, stats) {
                SearchOutcome::Solved => return SearchOutcome::Solved,
                SearchOutcome::Aborted => {
                    grid[pos] = None;
                    return SearchOutcome::Aborted;
                }
                SearchOutcome::Exhausted => grid[pos] = None,
            }
        }
        SearchOutcome::Exhausted
    }
}

/// Solves `grid` in place with the default attempt limit.
///
/// Convenience wrapper over [`BacktrackSolver::solve`]; see there for the
/// mutation and failure semantics.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitGrid, Position};
/// use ninefold_solver::solve;
///
/// let mut grid = DigitGrid::new();
/// grid[Position::new(0, 0)] = Some(Digit::D5);
///
/// assert!(solve(&mut grid));
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert!(grid.is_filled());
/// ```
pub fn solve(grid: &mut DigitGrid) -> bool {
    BacktrackSolver::new().solve(grid)
}
