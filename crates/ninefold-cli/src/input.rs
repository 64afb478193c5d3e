//! Validated parsing of setup commands.
//!
//! The shell's setup grammar is a fixed token set: three-character placement
//! triples, the `000` terminator, and `PREVIEW`. Parsing is pure and fully
//! decoupled from the solver; the session loop decides what to do with the
//! result.

use ninefold_core::{Digit, Position};

/// The token that ends puzzle setup.
pub const DONE_TOKEN: &str = "000";

/// A parsed setup command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a digit at a cell.
    Place {
        /// The digit to place.
        digit: Digit,
        /// The target cell.
        pos: Position,
    },
    /// Show the grid entered so far.
    Preview,
    /// Setup finished; solve the puzzle.
    Done,
}

/// Error for an input line that matches none of the setup commands.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unrecognized input: {token:?}")]
pub struct InputError {
    token: String,
}

/// Parses one line of setup input.
///
/// The grammar, matching the instructions screen:
///
/// - `000` — setup finished
/// - `PREVIEW` (any case) — display the grid
/// - a three-character placement: digit `1`-`9`, column letter `A`-`I`
///   (any case), row digit `1`-`9`. `1A2` places a 1 in column A, row 2.
///
/// Leading and trailing whitespace is ignored. Anything else is an
/// [`InputError`] naming the offending token.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let token = line.trim();
    if token == DONE_TOKEN {
        return Ok(Command::Done);
    }
    if token.eq_ignore_ascii_case("preview") {
        return Ok(Command::Preview);
    }
    parse_placement(token).ok_or_else(|| InputError {
        token: token.to_owned(),
    })
}

fn parse_placement(token: &str) -> Option<Command> {
    let mut chars = token.chars();
    let digit = Digit::from_ascii(chars.next()?)?;
    let x = column_index(chars.next()?)?;
    let y = row_index(chars.next()?)?;
    if chars.next().is_some() {
        return None;
    }
    Some(Command::Place {
        digit,
        pos: Position::new(x, y),
    })
}

/// Maps a column label to its x coordinate.
fn column_index(ch: char) -> Option<u8> {
    match ch.to_ascii_uppercase() {
        'A' => Some(0),
        'B' => Some(1),
        'C' => Some(2),
        'D' => Some(3),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(6),
        'H' => Some(7),
        'I' => Some(8),
        _ => None,
    }
}

/// Maps a row label `1`-`9` to its y coordinate.
fn row_index(ch: char) -> Option<u8> {
    Digit::from_ascii(ch).map(|digit| digit.value() - 1)
}
