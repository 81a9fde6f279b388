//! The stepwise search controller.

use std::fmt::{self, Display};

use stepku_core::{Board, CandidateSet, Cell, Group, InvalidPuzzleLength};

use crate::propagate::eliminate_naked_subsets;

/// Where the controller currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolverState {
    /// No puzzle has been loaded.
    Empty,
    /// A puzzle is loaded and the search is still running.
    Active,
    /// Terminal success: the top board is complete and conflict-free.
    Finished,
    /// Terminal failure: the original board itself is contradictory.
    Unsolvable,
}

impl Display for SolverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverState::Empty => "Empty",
            SolverState::Active => "Active",
            SolverState::Finished => "Finished",
            SolverState::Unsolvable => "Unsolvable",
        };
        f.write_str(name)
    }
}

/// A depth-first sudoku solver that advances one decision per call.
///
/// The solver owns a stack of board snapshots: bottom is the puzzle as
/// loaded, top is the current hypothesis, and the entries between are the
/// outstanding guesses. Each [`step`] call performs exactly one of: detect a
/// terminal state, undo the latest guess, run one elimination pass, or branch
/// on the most constrained cell. Driving it from a render loop therefore
/// animates the search; driving it from a `while` loop just solves the
/// puzzle.
///
/// [`step`]: StepSolver::step
///
/// # Examples
///
/// ```
/// use stepku_solver::StepSolver;
///
/// let mut solver = StepSolver::new();
/// solver.load(
///     "........74.6..7.....71285.6..3.71.5.8.......3.1.84.2..6.89327.....4..9.51........",
/// )?;
///
/// while solver.step() {}
///
/// assert!(solver.is_finished());
/// # Ok::<(), stepku_core::InvalidPuzzleLength>(())
/// ```
#[derive(Debug, Clone)]
pub struct StepSolver {
    stack: Vec<Board>,
    state: SolverState,
    moves: usize,
}

impl Default for StepSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSolver {
    /// Creates an empty solver; [`load`](StepSolver::load) it before
    /// stepping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stack: Vec::new(),
            state: SolverState::Empty,
            moves: 0,
        }
    }

    /// Loads an 81-character puzzle line, replacing any previous search.
    ///
    /// Digits 1-9 become locked clues, every other character a blank. On
    /// success the stack is reset to the single parsed board and the move
    /// counter to zero.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPuzzleLength`] for any other length, in which case
    /// the previous solver state is left untouched.
    pub fn load(&mut self, text: &str) -> Result<(), InvalidPuzzleLength> {
        let board = Board::from_line(text)?;
        self.stack.clear();
        self.stack.push(board);
        self.state = SolverState::Active;
        self.moves = 0;
        Ok(())
    }

    /// Advances the search by exactly one decision.
    ///
    /// Returns `true` if anything changed; `false` exactly when the solver
    /// sits in (or just reached) `Empty`, `Finished`, or `Unsolvable`. The
    /// caller polls [`state`](StepSolver::state) to tell the outcomes apart.
    ///
    /// The decision order per call: detect a finished top board; undo the
    /// latest guess if some group holds conflicting values (or give up when
    /// there is no guess left to undo); run one elimination pass; branch on
    /// the most constrained cell of the most constrained group when
    /// elimination has stalled.
    pub fn step(&mut self) -> bool {
        if !self.state.is_active() {
            return false;
        }
        if self.top_is(Board::is_finished) {
            self.state = SolverState::Finished;
            return false;
        }
        if self.top_is(Board::has_conflict) {
            return self.retract_guess();
        }
        if self.propagate_top() {
            self.moves += 1;
            return true;
        }
        if self.top_is(Board::is_complete) {
            // a complete board that passed the conflict check above would be
            // finished; this path cannot be reached while the checks agree
            log::warn!("complete board survived the conflict check without finishing");
            return self.retract_guess();
        }
        self.branch()
    }

    /// Returns the current controller state.
    #[must_use]
    pub const fn state(&self) -> SolverState {
        self.state
    }

    /// Returns `true` once the puzzle has been solved.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, SolverState::Finished)
    }

    /// Returns a copy of the cell at `(row, col)` of the current hypothesis.
    ///
    /// Valid in every state; while nothing is loaded this returns the
    /// locked-empty [`Cell::default`] so callers never need a null check.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8 while a board is
    /// loaded.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.stack
            .last()
            .map_or_else(Cell::default, |board| board.cell(row, col))
    }

    /// Returns the current hypothesis board, if any.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.stack.last()
    }

    /// Number of state-changing steps taken since the last load.
    #[must_use]
    pub const fn move_count(&self) -> usize {
        self.moves
    }

    /// Current search depth: 1 plus the number of outstanding guesses.
    #[must_use]
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    fn top_is(&self, check: impl Fn(&Board) -> bool) -> bool {
        self.stack.last().is_some_and(check)
    }

    /// Pops the latest guess, or gives up when only the original board
    /// remains.
    fn retract_guess(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            self.moves += 1;
            log::debug!("backtracked to depth {}", self.stack.len());
            true
        } else {
            self.state = SolverState::Unsolvable;
            false
        }
    }

    /// Runs one elimination pass on the top board and refreshes the
    /// diagnostic flags from its outcome.
    fn propagate_top(&mut self) -> bool {
        let Some(top) = self.stack.last_mut() else {
            return false;
        };
        if !eliminate_naked_subsets(top) {
            return false;
        }
        for i in 0..81 {
            top[i].inconsistent = false;
        }
        for group in &Group::ALL {
            let incorrect = top.incorrect_cells(group);
            if incorrect.is_empty() {
                continue;
            }
            log::debug!("{group} holds conflicting values after elimination");
            for slot in incorrect {
                let cell_index = group.members()[usize::from(slot)];
                top[usize::from(cell_index)].inconsistent = true;
            }
        }
        true
    }

    /// Replaces the top board with one copy per candidate of the most
    /// constrained cell, lowest value deepest so the highest is explored
    /// first.
    fn branch(&mut self) -> bool {
        let Some(top) = self.stack.last() else {
            self.state = SolverState::Unsolvable;
            return false;
        };
        let Some(group) = select_branch_group(top) else {
            // incomplete boards always have an unresolved group
            self.state = SolverState::Unsolvable;
            return false;
        };
        let cell_index = select_branch_cell(top, group);
        let candidates = top[usize::from(cell_index)].candidates;
        if candidates.is_empty() {
            log::debug!(
                "cell r{}c{} is out of candidates, undoing the latest guess",
                cell_index / 9 + 1,
                cell_index % 9 + 1
            );
            return self.retract_guess();
        }

        log::debug!(
            "branching on {group}: cell r{}c{} across {} candidates",
            cell_index / 9 + 1,
            cell_index % 9 + 1,
            candidates.len()
        );
        let Some(parent) = self.stack.pop() else {
            return false;
        };
        for digit in candidates {
            let mut child = parent.clone();
            let cell = &mut child[usize::from(cell_index)];
            cell.candidates = CandidateSet::only(digit);
            cell.guess = true;
            self.stack.push(child);
        }
        self.moves += 1;
        true
    }
}

/// Picks the group with the smallest sum of candidate-set sizes; fully
/// resolved groups are excluded, first group in table order wins ties.
/// `None` only if every group is fully resolved.
fn select_branch_group(board: &Board) -> Option<&'static Group> {
    let mut best_group = None;
    let mut best_score = u32::MAX;
    for group in &Group::ALL {
        let masks = board.group_masks(group);
        if masks.iter().all(|mask| mask.len() == 1) {
            continue;
        }
        let score = masks.iter().map(|mask| u32::from(mask.len())).sum();
        if score < best_score {
            best_score = score;
            best_group = Some(group);
        }
    }
    best_group
}

/// Picks the group's cell with the fewest remaining candidates. Resolved
/// cells rank as if they had ten candidates so they are never chosen; first
/// in group order wins ties.
fn select_branch_cell(board: &Board, group: &Group) -> u8 {
    let mut best_index = group.members()[0];
    let mut best_rank = u8::MAX;
    for &cell_index in group.members() {
        let len = board[usize::from(cell_index)].candidates.len();
        let rank = if len == 1 { 10 } else { len };
        if rank < best_rank {
            best_rank = rank;
            best_index = cell_index;
        }
    }
    best_index
}
