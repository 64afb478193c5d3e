//! Houses: the rows, columns, and boxes of the board.

use crate::Position;

/// A board house (row, column, or 3×3 box).
///
/// A house is a set of nine cells that must contain nine distinct digits.
/// Every position belongs to exactly three houses, one of each kind; see
/// [`House::containing`].
///
/// # Examples
///
/// ```
/// use ninefold_core::{House, Position};
///
/// let row = House::Row { y: 3 };
/// let cells: Vec<Position> = row.positions().collect();
/// assert_eq!(cells.len(), 9);
/// assert!(cells.iter().all(|pos| pos.y() == 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the three houses containing `pos`: its row, its column, and
    /// its box, in that order.
    #[must_use]
    pub const fn containing(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns an iterator over the nine positions contained in this house.
    #[inline]
    pub fn positions(self) -> impl Iterator<Item = Position> + Clone {
        (0..9).map(move |i| self.position_from_cell_index(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containing() {
        let pos = Position::new(5, 7);
        assert_eq!(
            House::containing(pos),
            [
                House::Row { y: 7 },
                House::Column { x: 5 },
                House::Box { index: 7 },
            ]
        );
    }

    #[test]
    fn test_every_house_contains_its_positions() {
        for house in House::ALL {
            for pos in house.positions() {
                assert!(House::containing(pos).contains(&house));
            }
        }
    }

    #[test]
    fn test_box_positions() {
        let cells: Vec<Position> = House::Box { index: 4 }.positions().collect();
        assert_eq!(cells.first(), Some(&Position::new(3, 3)));
        assert_eq!(cells.last(), Some(&Position::new(5, 5)));
        assert!(cells.iter().all(|pos| pos.box_index() == 4));
    }
}
