//! The 81-cell board, its textual loader, and the consistency checks.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use crate::candidates::CandidateSet;
use crate::cell::Cell;
use crate::digit::Digit;
use crate::group::{Group, GroupMask};

/// Error returned when puzzle text is not exactly 81 characters.
///
/// The textual format is strict: 81 characters, row-major, `'1'`-`'9'` for
/// clues, anything else for a blank. There is no whitespace tolerance, so a
/// wrong length is the only way loading can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("puzzle text must be exactly 81 characters, got {len}")]
pub struct InvalidPuzzleLength {
    /// Number of characters actually supplied.
    pub len: usize,
}

/// A 9x9 sudoku board: 81 [`Cell`]s addressed by `row * 9 + col`.
///
/// Boards are plain values; the search controller clones them freely to build
/// its snapshot stack. All checks here are pure: a board never knows whether
/// it is the original puzzle or a hypothesis several guesses deep.
///
/// # Examples
///
/// ```
/// use stepku_core::{Board, Digit};
///
/// let board = Board::from_line(&"3".repeat(81)).unwrap();
/// assert_eq!(board.cell(0, 0).value(), Some(Digit::D3));
/// assert!(board.is_complete());
/// assert!(!board.is_finished()); // every group is full of conflicts
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
}

impl Board {
    /// Parses an 81-character puzzle line.
    ///
    /// Characters `'1'`-`'9'` become locked clues; every other character
    /// (conventionally `'.'` or `'0'`) becomes a fully open cell.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPuzzleLength`] if `text` is not exactly 81
    /// characters.
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_line(text: &str) -> Result<Self, InvalidPuzzleLength> {
        let len = text.chars().count();
        if len != 81 {
            return Err(InvalidPuzzleLength { len });
        }
        let mut cells = [Cell::open(); 81];
        for (cell, ch) in cells.iter_mut().zip(text.chars()) {
            if let Some(value @ 1..=9) = ch.to_digit(10) {
                *cell = Cell::clue(Digit::from_value(value as u8));
            }
        }
        Ok(Self { cells })
    }

    /// Returns a copy of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < 9, "Row must be 0-8, got {row}");
        assert!(col < 9, "Col must be 0-8, got {col}");
        self.cells[row * 9 + col]
    }

    /// Positions within `group` whose resolved values collide.
    ///
    /// Counts, over the group's nine cells, how many resolved cells claim
    /// each value; any value claimed more than once makes all of its
    /// claimants incorrect. Unresolved cells are ignored, so a group that is
    /// merely incomplete reports nothing.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn incorrect_cells(&self, group: &Group) -> GroupMask {
        let mut claims = [GroupMask::EMPTY; 9];
        for (slot, &cell_index) in group.members().iter().enumerate() {
            if let Some(digit) = self.cells[usize::from(cell_index)].value() {
                claims[usize::from(digit.index())].insert(slot as u8);
            }
        }
        let mut incorrect = GroupMask::EMPTY;
        for claim in claims {
            if claim.len() > 1 {
                incorrect |= claim;
            }
        }
        incorrect
    }

    /// Returns `true` if any group holds colliding resolved values.
    #[must_use]
    pub fn has_conflict(&self) -> bool {
        Group::ALL
            .iter()
            .any(|group| !self.incorrect_cells(group).is_empty())
    }

    /// Returns `true` if every cell is resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Cell::is_resolved)
    }

    /// Returns `true` if the board is complete and every group is
    /// conflict-free.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_complete() && !self.has_conflict()
    }

    /// Sum of the candidate-set sizes over all 81 cells.
    ///
    /// Strictly decreases on every productive elimination pass and every
    /// branch, which is the measure behind the termination argument.
    #[must_use]
    pub fn candidate_count(&self) -> u32 {
        self.cells
            .iter()
            .map(|cell| u32::from(cell.candidates.len()))
            .sum()
    }

    /// The candidate masks of `group`'s cells, in slot order.
    #[must_use]
    pub fn group_masks(&self, group: &Group) -> [CandidateSet; 9] {
        group
            .members()
            .map(|cell_index| self.cells[usize::from(cell_index)].candidates)
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }
}

impl Display for Board {
    /// Renders nine rows of nine characters, `.` for unresolved cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                match self.cells[row * 9 + col].value() {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str(".")?,
                }
            }
            if row < 8 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // rows shifted by 0, 3, 6, 1, 4, 7, 2, 5, 8: a valid completed grid
    const SOLVED_LINE: &str =
        "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

    #[test]
    fn test_from_line_rejects_wrong_length() {
        assert_eq!(Board::from_line("123"), Err(InvalidPuzzleLength { len: 3 }));
        assert_eq!(
            Board::from_line(&".".repeat(80)),
            Err(InvalidPuzzleLength { len: 80 })
        );
        assert_eq!(
            Board::from_line(&".".repeat(82)),
            Err(InvalidPuzzleLength { len: 82 })
        );
        let err = Board::from_line("").unwrap_err();
        assert_eq!(err.to_string(), "puzzle text must be exactly 81 characters, got 0");
    }

    #[test]
    fn test_from_line_maps_clues_and_blanks() {
        let mut text = String::from("5.0x7");
        text.push_str(&".".repeat(76));
        let board = Board::from_line(&text).unwrap();

        assert_eq!(board.cell(0, 0).value(), Some(Digit::D5));
        assert!(board.cell(0, 0).locked);
        // '.', '0' and 'x' all mean blank
        for col in [1, 2, 3] {
            assert_eq!(board.cell(0, col).value(), None);
            assert!(!board.cell(0, col).locked);
            assert_eq!(board.cell(0, col).candidates.len(), 9);
        }
        assert_eq!(board.cell(0, 4).value(), Some(Digit::D7));
    }

    #[test]
    fn test_incorrect_cells_flags_duplicate_claimants() {
        let mut text = String::from("5.5");
        text.push_str(&".".repeat(78));
        let board = Board::from_line(&text).unwrap();

        let row = &Group::ALL[0];
        let incorrect = board.incorrect_cells(row);
        assert_eq!(incorrect.len(), 2);
        assert!(incorrect.contains(0));
        assert!(incorrect.contains(2));
    }

    #[test]
    fn test_incomplete_group_is_not_incorrect() {
        let mut text = String::from("123");
        text.push_str(&".".repeat(78));
        let board = Board::from_line(&text).unwrap();

        for group in &Group::ALL {
            assert!(board.incorrect_cells(group).is_empty(), "{group}");
        }
        assert!(!board.has_conflict());
    }

    #[test]
    fn test_solved_grid_is_finished() {
        let board = Board::from_line(SOLVED_LINE).unwrap();
        assert!(board.is_complete());
        assert!(!board.has_conflict());
        assert!(board.is_finished());
    }

    #[test]
    fn test_blank_board_is_not_complete() {
        let board = Board::from_line(&".".repeat(81)).unwrap();
        assert!(!board.is_complete());
        assert!(!board.is_finished());
        assert_eq!(board.candidate_count(), 81 * 9);
    }

    #[test]
    fn test_display_round_trips_clues() {
        let board = Board::from_line(SOLVED_LINE).unwrap();
        let rendered: String = board.to_string().chars().filter(|c| *c != '\n').collect();
        assert_eq!(rendered, SOLVED_LINE);

        let blank = Board::from_line(&".".repeat(81)).unwrap();
        assert!(blank.to_string().chars().all(|c| c == '.' || c == '\n'));
    }

    #[test]
    fn test_group_masks_follow_slot_order() {
        let mut text = String::from("9");
        text.push_str(&".".repeat(80));
        let board = Board::from_line(&text).unwrap();

        let masks = board.group_masks(&Group::ALL[0]);
        assert_eq!(masks[0].as_single(), Some(Digit::D9));
        assert_eq!(masks[1], CandidateSet::FULL);
    }

    #[test]
    #[should_panic(expected = "Row must be 0-8")]
    fn test_cell_rejects_out_of_range_row() {
        let board = Board::from_line(&".".repeat(81)).unwrap();
        let _ = board.cell(9, 0);
    }
}
