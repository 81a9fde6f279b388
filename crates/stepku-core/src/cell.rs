//! A single board cell: its candidate set plus status flags.

use crate::candidates::CandidateSet;
use crate::digit::Digit;

/// One cell of a sudoku board.
///
/// A cell *has a value* exactly when one candidate bit remains; the value is
/// that digit. None of the constructors or accessors can fail: a cell with
/// zero candidates is a legal transient state that the consistency checks
/// detect, not an error here.
///
/// Flags:
///
/// - `locked` — the cell was an original clue and is never altered after load.
/// - `guess` — the current single value was picked by the search controller
///   rather than derived by elimination. Informational only.
/// - `inconsistent` — the last elimination pass saw this cell inside a group
///   that violates uniqueness. Informational only; the controller re-checks
///   group correctness itself before backtracking.
///
/// # Examples
///
/// ```
/// use stepku_core::{Cell, Digit};
///
/// let clue = Cell::clue(Digit::D4);
/// assert_eq!(clue.value(), Some(Digit::D4));
/// assert!(clue.locked);
///
/// let open = Cell::open();
/// assert_eq!(open.value(), None);
/// assert_eq!(open.candidates.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Digits still possible for this cell.
    pub candidates: CandidateSet,
    /// Original clue, never modified after load.
    pub locked: bool,
    /// Single value was assigned by the search controller.
    pub guess: bool,
    /// Flagged by the last elimination pass as part of a conflicting group.
    pub inconsistent: bool,
}

impl Cell {
    /// Creates a resolved, locked cell from an original clue.
    #[must_use]
    pub const fn clue(digit: Digit) -> Self {
        Self {
            candidates: CandidateSet::only(digit),
            locked: true,
            guess: false,
            inconsistent: false,
        }
    }

    /// Creates an unresolved cell with all nine candidates open.
    #[must_use]
    pub const fn open() -> Self {
        Self {
            candidates: CandidateSet::FULL,
            locked: false,
            guess: false,
            inconsistent: false,
        }
    }

    /// Returns the resolved digit, or `None` while more than one (or zero)
    /// candidates remain.
    #[must_use]
    pub const fn value(&self) -> Option<Digit> {
        self.candidates.as_single()
    }

    /// Returns `true` if exactly one candidate remains.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.candidates.len() == 1
    }
}

/// The locked-empty placeholder handed out when no puzzle is loaded.
///
/// Callers reading cells from an empty solver get this instead of an
/// `Option`: no value, no candidates, and locked so that no caller treats it
/// as editable.
impl Default for Cell {
    fn default() -> Self {
        Self {
            candidates: CandidateSet::EMPTY,
            locked: true,
            guess: false,
            inconsistent: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clue_is_resolved_and_locked() {
        for digit in Digit::ALL {
            let cell = Cell::clue(digit);
            assert_eq!(cell.value(), Some(digit));
            assert!(cell.is_resolved());
            assert!(cell.locked);
            assert!(!cell.guess);
            assert!(!cell.inconsistent);
        }
    }

    #[test]
    fn test_open_has_all_candidates() {
        let cell = Cell::open();
        assert_eq!(cell.candidates.len(), 9);
        assert_eq!(cell.value(), None);
        assert!(!cell.is_resolved());
        assert!(!cell.locked);
    }

    #[test]
    fn test_default_is_locked_empty() {
        let cell = Cell::default();
        assert_eq!(cell.value(), None);
        assert!(cell.candidates.is_empty());
        assert!(cell.locked);
    }

    #[test]
    fn test_zero_candidates_is_not_resolved() {
        let mut cell = Cell::open();
        cell.candidates = CandidateSet::EMPTY;
        assert_eq!(cell.value(), None);
        assert!(!cell.is_resolved());
    }
}
