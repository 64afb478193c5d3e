//! Terminal rendering of the grid.

use ninefold_core::{DigitGrid, Position};

/// Formats the grid for display, with `A`-`I` column labels, `1`-`9` row
/// labels, and `|` / `-` rules between the 3×3 boxes. Empty cells show as
/// `0`, matching the placement token digits.
///
/// ```text
///    A B C    D E F    G H I
/// 1  0 0 0  | 0 0 0  | 0 0 0
/// 2  1 0 0  | 0 0 0  | 0 0 0
/// 3  0 0 0  | 0 0 0  | 0 0 0
///    - - - - - - - - - - - - -
/// ...
/// ```
pub fn render_grid(grid: &DigitGrid) -> String {
    let mut out = String::from("   A B C    D E F    G H I\n");
    for y in 0..9u8 {
        if y % 3 == 0 && y != 0 {
            out.push_str("   - - - - - - - - - - - - -\n");
        }
        out.push(char::from(b'1' + y));
        out.push_str("  ");
        for x in 0..9u8 {
            if x % 3 == 0 && x != 0 {
                out.push_str(" | ");
            }
            let cell = grid[Position::new(x, y)].map_or('0', |digit| char::from(b'0' + digit.value()));
            out.push(cell);
            if x != 8 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}
