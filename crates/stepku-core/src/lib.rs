//! Core data structures for the Stepku solver.
//!
//! This crate holds everything a solver (or a renderer) needs to talk about a
//! 9x9 sudoku puzzle, with no solving logic of its own:
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`candidates`]: per-cell candidate sets as 9-bit masks
//! - [`cell`]: a cell's candidates plus its status flags
//! - [`group`]: the 27 statically enumerated uniqueness constraints
//! - [`board`]: the 81-cell board, its textual loader, and the pure
//!   correctness and completion checks
//!
//! # Examples
//!
//! ```
//! use stepku_core::{Board, Digit, Group};
//!
//! let mut text = String::from("17");
//! text.push_str(&".".repeat(79));
//! let board = Board::from_line(&text)?;
//!
//! assert_eq!(board.cell(0, 0).value(), Some(Digit::D1));
//! assert!(!board.is_complete());
//!
//! // no group holds two copies of the same resolved value
//! assert!(Group::ALL.iter().all(|g| board.incorrect_cells(g).is_empty()));
//! # Ok::<(), stepku_core::InvalidPuzzleLength>(())
//! ```

pub mod board;
pub mod candidates;
pub mod cell;
pub mod digit;
pub mod group;

pub use self::{
    board::{Board, InvalidPuzzleLength},
    candidates::CandidateSet,
    cell::Cell,
    digit::Digit,
    group::{Group, GroupKind, GroupMask},
};
