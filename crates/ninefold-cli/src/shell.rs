//! The interactive session: setup, solve, report, play again.

use std::io::{self, BufRead, Write};

use log::{debug, info};
use ninefold_core::DigitGrid;
use ninefold_solver::BacktrackSolver;

use crate::{
    input::{self, Command},
    render::render_grid,
};

/// Consecutive invalid play-again answers tolerated before giving up.
const MAX_INVALID_ANSWERS: usize = 6;

/// Runs interactive sessions until the user declines to continue (or the
/// input stream ends).
///
/// The caller owns nothing here but the solver configuration; each round
/// starts from a fresh empty grid that the user fills through setup
/// commands.
pub fn run<R, W>(solver: &BacktrackSolver, mut lines: R, mut out: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    print_instructions(&mut out)?;
    loop {
        let mut grid = DigitGrid::new();
        if !setup(&mut grid, &mut lines, &mut out)? {
            return Ok(());
        }

        writeln!(out, "Unsolved puzzle:")?;
        out.write_all(render_grid(&grid).as_bytes())?;

        let (solved, stats) = solver.solve_with_stats(&mut grid);
        info!(
            "search finished: solved={solved} attempts={} limit={}",
            stats.attempts(),
            solver.attempt_limit()
        );
        if solved {
            writeln!(out, "Solved puzzle:")?;
            out.write_all(render_grid(&grid).as_bytes())?;
        } else {
            writeln!(out, "No solution found; the puzzle appears to be unsolvable.")?;
        }

        if !play_again(&mut lines, &mut out)? {
            return Ok(());
        }
        writeln!(out, "Board reset. Enter the next puzzle one cell at a time.")?;
    }
}

fn print_instructions<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to ninefold!")?;
    writeln!(out, "Enter your puzzle one cell at a time.")?;
    writeln!(
        out,
        "Columns are labeled A-I and rows 1-9; each entry is a digit followed \
         by its column and row. For example, 1A2 places a 1 in column A, row 2."
    )?;
    out.write_all(render_grid(&DigitGrid::new()).as_bytes())?;
    writeln!(
        out,
        "Enter 000 once the puzzle is complete, or PREVIEW to see it so far."
    )
}

/// Reads setup commands into `grid` until the user finishes setup.
///
/// Returns `Ok(false)` if the input stream ended before setup completed.
fn setup<R, W>(grid: &mut DigitGrid, lines: &mut R, out: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_line(lines)? else {
            return Ok(false);
        };
        match input::parse_command(&line) {
            Ok(Command::Done) => return Ok(true),
            Ok(Command::Preview) => out.write_all(render_grid(grid).as_bytes())?,
            Ok(Command::Place { digit, pos }) => {
                // Contradictory or overwritten givens are accepted as-is;
                // the solver is what reports an impossible puzzle.
                debug!("placing {digit} at {pos}");
                grid[pos] = Some(digit);
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}

/// Asks whether to start another round. Bounded retry on invalid answers.
fn play_again<R, W>(lines: &mut R, out: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Continue playing? (yes or no)")?;
    let mut invalid = 0;
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_line(lines)? else {
            return Ok(false);
        };
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("yes") {
            return Ok(true);
        }
        if answer.eq_ignore_ascii_case("no") {
            return Ok(false);
        }
        invalid += 1;
        if invalid >= MAX_INVALID_ANSWERS {
            writeln!(out, "Too many invalid answers; quitting.")?;
            return Ok(false);
        }
        writeln!(out, "Please answer yes or no.")?;
    }
}

/// Reads one line, or `None` at end of input.
fn read_line<R: BufRead>(lines: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if lines.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs a scripted session and returns everything written to the output.
    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        run(&BacktrackSolver::new(), script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_trivial_puzzle_round() {
        let out = run_script("5A1\n000\nno\n");
        assert!(out.contains("Unsolved puzzle:"));
        assert!(out.contains("Solved puzzle:"));
        // The given survives in the solved rendering.
        assert!(out.contains("1  5 "));
    }

    #[test]
    fn test_unsolvable_puzzle_reports_without_solved_grid() {
        let out = run_script("5A1\n5B1\n000\nno\n");
        assert!(out.contains("appears to be unsolvable"));
        assert!(!out.contains("Solved puzzle:"));
    }

    #[test]
    fn test_preview_shows_the_entered_cell() {
        let out = run_script("1A2\npreview\n000\nno\n");
        assert!(out.contains("2  1 0 0  | 0 0 0  | 0 0 0"));
    }

    #[test]
    fn test_invalid_setup_input_is_reported_and_ignored() {
        let out = run_script("nonsense\n5A1\n000\nno\n");
        assert!(out.contains("unrecognized input: \"nonsense\""));
        assert!(out.contains("Solved puzzle:"));
    }

    #[test]
    fn test_play_again_starts_a_fresh_round() {
        let out = run_script("5A1\n000\nyes\n9I9\n000\nno\n");
        assert!(out.contains("Board reset"));
        // The second round's unsolved grid does not carry the first given.
        let second_round = out.split("Board reset").nth(1).unwrap();
        assert!(second_round.contains("9  0 0 0  | 0 0 0  | 0 0 9"));
    }

    #[test]
    fn test_play_again_gives_up_after_too_many_invalid_answers() {
        let out = run_script("000\nmaybe\nmaybe\nmaybe\nmaybe\nmaybe\nmaybe\n");
        assert!(out.contains("Too many invalid answers"));
    }

    #[test]
    fn test_end_of_input_quits_cleanly() {
        assert!(run_script("5A1\n").contains("> "));
        assert!(run_script("").contains("Welcome"));
    }
}
