//! Core data structures for the ninefold puzzle solver.
//!
//! This crate provides the domain types shared by the solver and the
//! interactive shell:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`Position`]: board position as an (x, y) coordinate pair
//! - [`House`]: a row, column, or 3×3 box of the board
//! - [`DigitGrid`]: the 9×9 grid of placed digits
//!
//! The grid deliberately stays dumb: it stores digits, converts to and from
//! textual and integer representations, and answers simple occupancy queries.
//! All rule knowledge (what makes a placement legal) lives in the solver
//! crate.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid[Position::new(0, 0)] = Some(Digit::D5);
//!
//! assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
//! assert_eq!(grid.first_empty(), Some(Position::new(1, 0)));
//! ```

pub mod digit;
pub mod digit_grid;
pub mod house;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
};
